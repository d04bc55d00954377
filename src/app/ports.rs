use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::mapping::{NormalizedRecord, Schema};

/// Outbound port to the capture services' bulk ingest routes.
#[async_trait]
pub trait BulkIngestPort: Send + Sync {
    async fn submit(&self, schema: Schema, records: &[NormalizedRecord]) -> Result<IngestReceipt>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestReceipt {
    pub schema: Schema,
    pub endpoint: String,
    pub submitted: usize,
    pub accepted: usize,
    pub requests: usize,
}
