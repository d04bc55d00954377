pub mod config;
pub mod constants;
pub mod csv_source;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod mapping;
pub mod metrics;
pub mod session;

// Layered boundaries for application use cases and infrastructure adapters
pub mod app;
pub mod infra;

pub use mapping::{map_row, map_rows, CellValue, FieldValue, NormalizedRecord, RawRow, Schema};
