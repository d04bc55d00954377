use async_trait::async_trait;
use tracing::{debug, warn};

use crate::app::ports::{BulkIngestPort, IngestReceipt};
use crate::config::IngestConfig;
use crate::error::{MapperError, Result};
use crate::mapping::{NormalizedRecord, Schema};
use crate::metrics::MapperMetrics;

/// Posts mapped trades as JSON arrays to the configured bulk endpoints.
pub struct ReqwestBulkIngest {
    client: reqwest::Client,
    config: IngestConfig,
}

impl ReqwestBulkIngest {
    pub fn new(config: IngestConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// Returns how many records the service reports storing.
    async fn post_batch(&self, endpoint: &str, batch: &[NormalizedRecord]) -> Result<usize> {
        debug!("POST {} records to {}", batch.len(), endpoint);
        let resp = self.client.post(endpoint).json(batch).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(MapperError::Api { status: status.as_u16(), message: body });
        }

        // Capture services echo the stored trades back as an array
        let accepted = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.as_array().map(|a| a.len()))
            .unwrap_or(batch.len());
        Ok(accepted)
    }
}

#[async_trait]
impl BulkIngestPort for ReqwestBulkIngest {
    async fn submit(&self, schema: Schema, records: &[NormalizedRecord]) -> Result<IngestReceipt> {
        let endpoint = self.config.endpoint_for(schema).to_string();
        let mut receipt = IngestReceipt {
            schema,
            endpoint: endpoint.clone(),
            submitted: 0,
            accepted: 0,
            requests: 0,
        };

        if records.is_empty() {
            warn!("No {} trades to submit", schema);
            return Ok(receipt);
        }

        let chunk = match self.config.batch_size {
            0 => records.len(),
            n => n,
        };

        for batch in records.chunks(chunk) {
            receipt.requests += 1;
            match self.post_batch(&endpoint, batch).await {
                Ok(accepted) => {
                    MapperMetrics::record_upload_success(schema);
                    receipt.submitted += batch.len();
                    receipt.accepted += accepted;
                }
                Err(e) if receipt.submitted == 0 => {
                    MapperMetrics::record_upload_failure(schema);
                    return Err(e);
                }
                Err(e) => {
                    MapperMetrics::record_upload_failure(schema);
                    warn!(
                        "{} of {} {} trades already stored at {} before the failure",
                        receipt.submitted,
                        records.len(),
                        schema,
                        endpoint
                    );
                    return Err(MapperError::PartialUpload {
                        submitted: receipt.submitted,
                        accepted: receipt.accepted,
                        requests: receipt.requests - 1,
                        source: Box::new(e),
                    });
                }
            }
        }

        Ok(receipt)
    }
}
