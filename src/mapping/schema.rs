use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::field_maps::*;
use crate::constants;
use crate::error::{MapperError, Result};

/// Instrument schema a file is captured under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    #[default]
    Equity,
    #[serde(rename = "fx", alias = "forex")]
    Forex,
}

/// How the mapper coerces a canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Float,
    Integer,
    Date,
    YesNo,
    TradeSide,
    Text,
}

impl Schema {
    pub fn as_str(&self) -> &'static str {
        match self {
            Schema::Equity => constants::EQUITY_SCHEMA,
            Schema::Forex => constants::FOREX_SCHEMA,
        }
    }

    /// Ordered header spelling to canonical field table.
    pub fn field_map(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Schema::Equity => EQUITY_FIELD_MAP,
            Schema::Forex => FOREX_FIELD_MAP,
        }
    }

    pub fn kind_of(&self, field: &str) -> FieldKind {
        match self {
            Schema::Equity => {
                if EQUITY_NUMERIC_FIELDS.contains(&field) {
                    FieldKind::Float
                } else if EQUITY_DATE_FIELDS.contains(&field) {
                    FieldKind::Date
                } else if EQUITY_YES_NO_FIELDS.contains(&field) {
                    FieldKind::YesNo
                } else if field == EQUITY_DIRECTION_FIELD {
                    FieldKind::TradeSide
                } else {
                    FieldKind::Text
                }
            }
            Schema::Forex => {
                if FOREX_NUMERIC_FIELDS.contains(&field) {
                    FieldKind::Float
                } else if FOREX_INTEGER_FIELDS.contains(&field) {
                    FieldKind::Integer
                } else {
                    FieldKind::Text
                }
            }
        }
    }

    /// Canonical fields in first-seen table order, without duplicates.
    pub fn canonical_fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        for &(_, field) in self.field_map() {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }

    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Schema::Equity => constants::DEFAULT_EQUITY_ENDPOINT,
            Schema::Forex => constants::DEFAULT_FOREX_ENDPOINT,
        }
    }

    /// Picks the schema from an upload's file name prefix.
    pub fn from_file_name(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if name.starts_with(constants::EQUITY_FILE_PREFIX) {
            Ok(Schema::Equity)
        } else if name.starts_with(constants::FOREX_FILE_PREFIX) {
            Ok(Schema::Forex)
        } else {
            Err(MapperError::UnknownFileType(path.display().to_string()))
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Schema {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "equity" => Ok(Schema::Equity),
            "fx" | "forex" => Ok(Schema::Forex),
            other => Err(MapperError::Config(format!(
                "unknown schema '{}', expected one of {:?}",
                other,
                constants::get_supported_schemas()
            ))),
        }
    }
}
