//! Mapper and upload metrics
//!
//! Counters go through the `metrics` facade; without an installed recorder
//! they are no-ops.

use crate::mapping::Schema;

pub const ROWS_MAPPED: &str = "trade_mapper_rows_mapped_total";
pub const MAPPING_WARNINGS: &str = "trade_mapper_mapping_warnings_total";
pub const UPLOAD_REQUESTS: &str = "trade_mapper_upload_requests_total";
pub const UPLOAD_FAILURES: &str = "trade_mapper_upload_failures_total";

/// Metrics collection for the mapping and upload steps
pub struct MapperMetrics;

impl MapperMetrics {
    /// Record one mapped row and the fallbacks it needed
    pub fn record_row(schema: Schema, warnings: usize) {
        ::metrics::counter!(ROWS_MAPPED, "schema" => schema.as_str()).increment(1);
        if warnings > 0 {
            ::metrics::counter!(MAPPING_WARNINGS, "schema" => schema.as_str()).increment(warnings as u64);
        }
    }

    pub fn record_upload_success(schema: Schema) {
        ::metrics::counter!(UPLOAD_REQUESTS, "schema" => schema.as_str()).increment(1);
    }

    pub fn record_upload_failure(schema: Schema) {
        ::metrics::counter!(UPLOAD_REQUESTS, "schema" => schema.as_str()).increment(1);
        ::metrics::counter!(UPLOAD_FAILURES, "schema" => schema.as_str()).increment(1);
    }
}
