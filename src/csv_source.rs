//! Reads capture spreadsheets exported as CSV into [`RawRow`]s.

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::mapping::RawRow;

/// Reads every data line of a headed CSV.
///
/// Cells are kept verbatim. Lines shorter than the header leave the
/// trailing headers out of the row, extra cells are ignored, and lines with
/// no content at all are skipped. Bytes that are not UTF-8 (a Windows-1252
/// `£` from a spreadsheet export) decode to U+FFFD instead of failing the file.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = String::from_utf8_lossy(h);
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.into_owned()
            }
        })
        .collect();
    debug!("CSV headers: {:?}", headers);

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    let mut lossy = 0usize;
    for record in reader.byte_records() {
        let record = record?;
        let cells: Vec<Cow<'_, str>> = record.iter().map(String::from_utf8_lossy).collect();
        if cells.iter().all(|cell| cell.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        if cells.iter().any(|cell| matches!(cell, Cow::Owned(_))) {
            lossy += 1;
        }
        let row: RawRow = headers
            .iter()
            .zip(cells)
            .map(|(header, cell)| (header.as_str(), cell.into_owned()))
            .collect();
        rows.push(row);
    }

    if lossy > 0 {
        warn!("{} CSV rows contained bytes that are not UTF-8; replaced with U+FFFD", lossy);
    }
    debug!("Read {} CSV rows ({} blank skipped)", rows.len(), skipped);
    Ok(rows)
}

pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let rows = read_rows(file)?;
    info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
