//! Row mapper: turns spreadsheet rows with loosely spelled headers into the
//! records the capture services ingest.
//!
//! Mapping never fails. Every coercion has a fallback (zero, the untouched
//! input, or an empty string); the fallbacks taken are reported as
//! [`MappingWarning`]s for callers that want to surface them.

pub mod coerce;
pub mod field_maps;
pub mod schema;
pub mod value;

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use tracing::debug;

use crate::metrics::MapperMetrics;
use coerce::{normalize_date, normalize_trade_side, normalize_yes_no, parse_integer, parse_number};

pub use schema::{FieldKind, Schema};
pub use value::{CellValue, FieldValue, NormalizedRecord, RawRow};

/// Which fallback the mapper took for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    NumericDefaulted,
    IntegerDefaulted,
    UnrecognizedDate,
    UnrecognizedYesNo,
    UnrecognizedTradeSide,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingWarning {
    pub field: &'static str,
    pub kind: WarningKind,
    pub input: CellValue,
}

impl fmt::Display for MappingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?} for input {:?}", self.field, self.kind, self.input)
    }
}

/// Maps one raw row under `schema`.
pub fn map_row(schema: Schema, row: &RawRow) -> NormalizedRecord {
    map_row_with_warnings(schema, row).0
}

/// Maps one raw row and reports every fallback taken.
pub fn map_row_with_warnings(schema: Schema, row: &RawRow) -> (NormalizedRecord, Vec<MappingWarning>) {
    let mut record = NormalizedRecord::default();
    let mut warnings = Vec::new();
    let mut resolved: HashSet<&'static str> = HashSet::new();

    for &(header, field) in schema.field_map() {
        if resolved.contains(field) {
            continue;
        }
        if let Some(cell) = row.get(header) {
            resolved.insert(field);
            let (value, warning) = coerce_field(schema.kind_of(field), cell);
            if let Some(kind) = warning {
                warnings.push(MappingWarning { field, kind, input: cell.clone() });
            }
            record.insert(field, value);
        }
    }

    // Fields no spelling supplied still get their default
    for field in schema.canonical_fields() {
        if !resolved.contains(field) {
            let (value, _) = coerce_field(schema.kind_of(field), &CellValue::Empty);
            record.insert(field, value);
        }
    }

    for w in &warnings {
        debug!(schema = %schema, field = w.field, kind = ?w.kind, input = ?w.input, "mapping fallback");
    }
    MapperMetrics::record_row(schema, warnings.len());

    (record, warnings)
}

/// Maps rows independently, preserving order.
pub fn map_rows(schema: Schema, rows: &[RawRow]) -> Vec<NormalizedRecord> {
    rows.iter().map(|row| map_row(schema, row)).collect()
}

/// Maps rows and tallies the fallbacks taken across the batch.
pub fn map_rows_with_summary(schema: Schema, rows: &[RawRow]) -> (Vec<NormalizedRecord>, MappingSummary) {
    let mut summary = MappingSummary { schema, ..MappingSummary::default() };
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let (record, warnings) = map_row_with_warnings(schema, row);
        summary.rows += 1;
        if !warnings.is_empty() {
            summary.rows_with_warnings += 1;
        }
        for w in warnings {
            *summary.warnings.entry(w.kind).or_insert(0) += 1;
        }
        records.push(record);
    }

    (records, summary)
}

/// Per-batch mapping statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MappingSummary {
    pub schema: Schema,
    pub rows: usize,
    pub rows_with_warnings: usize,
    pub warnings: BTreeMap<WarningKind, usize>,
}

impl MappingSummary {
    pub fn total_warnings(&self) -> usize {
        self.warnings.values().sum()
    }
}

fn coerce_field(kind: FieldKind, cell: &CellValue) -> (FieldValue, Option<WarningKind>) {
    match kind {
        FieldKind::Float => coerce_float(cell),
        FieldKind::Integer => coerce_integer(cell),
        FieldKind::Date => coerce_date(cell),
        FieldKind::YesNo => coerce_yes_no(cell),
        FieldKind::TradeSide => coerce_trade_side(cell),
        FieldKind::Text => (passthrough(cell, true), None),
    }
}

/// Non-text values survive as-is; text is optionally trimmed.
fn passthrough(cell: &CellValue, trim: bool) -> FieldValue {
    match cell {
        CellValue::Text(s) if trim => FieldValue::text(s.trim()),
        CellValue::Text(s) => FieldValue::text(s.as_str()),
        CellValue::Number(n) => FieldValue::Float(*n),
        CellValue::Bool(b) => FieldValue::Bool(*b),
        CellValue::Empty => FieldValue::text(""),
    }
}

fn coerce_float(cell: &CellValue) -> (FieldValue, Option<WarningKind>) {
    match cell {
        CellValue::Number(n) if n.is_finite() => (FieldValue::Float(*n), None),
        CellValue::Text(s) => match parse_number(s) {
            Some(n) => (FieldValue::Float(n), None),
            None if s.trim().is_empty() => (FieldValue::Float(0.0), None),
            None => (FieldValue::Float(0.0), Some(WarningKind::NumericDefaulted)),
        },
        CellValue::Empty => (FieldValue::Float(0.0), None),
        _ => (FieldValue::Float(0.0), Some(WarningKind::NumericDefaulted)),
    }
}

fn coerce_integer(cell: &CellValue) -> (FieldValue, Option<WarningKind>) {
    match cell {
        CellValue::Number(n) if n.is_finite() => (FieldValue::Integer(n.trunc() as i64), None),
        CellValue::Text(s) => match parse_integer(s) {
            Some(i) => (FieldValue::Integer(i), None),
            None if s.trim().is_empty() => (FieldValue::Integer(0), None),
            None => (FieldValue::Integer(0), Some(WarningKind::IntegerDefaulted)),
        },
        CellValue::Empty => (FieldValue::Integer(0), None),
        _ => (FieldValue::Integer(0), Some(WarningKind::IntegerDefaulted)),
    }
}

fn coerce_date(cell: &CellValue) -> (FieldValue, Option<WarningKind>) {
    let text = match cell {
        CellValue::Empty | CellValue::Bool(false) => return (FieldValue::text(""), None),
        CellValue::Number(n) if *n == 0.0 => return (FieldValue::text(""), None),
        CellValue::Text(s) if s.trim().is_empty() => return (FieldValue::text(""), None),
        CellValue::Text(s) => s.clone(),
        CellValue::Number(n) => n.to_string(),
        CellValue::Bool(true) => "true".to_string(),
    };

    match normalize_date(&text) {
        Some(iso) => (FieldValue::Text(iso), None),
        None => (passthrough(cell, false), Some(WarningKind::UnrecognizedDate)),
    }
}

fn coerce_yes_no(cell: &CellValue) -> (FieldValue, Option<WarningKind>) {
    match cell {
        CellValue::Bool(true) => (FieldValue::text("Yes"), None),
        CellValue::Bool(false) => (FieldValue::text("No"), None),
        CellValue::Text(s) => match normalize_yes_no(s) {
            Some(v) => (FieldValue::text(v), None),
            None if s.trim().is_empty() => (FieldValue::text(s.as_str()), None),
            None => (FieldValue::text(s.as_str()), Some(WarningKind::UnrecognizedYesNo)),
        },
        CellValue::Empty => (FieldValue::text(""), None),
        CellValue::Number(n) => (FieldValue::Float(*n), Some(WarningKind::UnrecognizedYesNo)),
    }
}

fn coerce_trade_side(cell: &CellValue) -> (FieldValue, Option<WarningKind>) {
    match cell {
        CellValue::Text(s) => match normalize_trade_side(s) {
            Some(v) => (FieldValue::text(v), None),
            None if s.trim().is_empty() => (FieldValue::text(s.as_str()), None),
            // left untouched for the capture service to reject
            None => (FieldValue::text(s.as_str()), Some(WarningKind::UnrecognizedTradeSide)),
        },
        CellValue::Empty => (FieldValue::text(""), None),
        other => (passthrough(other, false), Some(WarningKind::UnrecognizedTradeSide)),
    }
}
