use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn, Instrument};

use crate::app::ports::{BulkIngestPort, IngestReceipt};
use crate::csv_source;
use crate::error::Result;
use crate::mapping::{map_rows_with_summary, MappingSummary, NormalizedRecord, Schema};

/// Outcome of mapping one file, and of submitting it when not a dry run.
#[derive(Debug, Clone, Serialize)]
pub struct UploadReport {
    pub file: PathBuf,
    pub summary: MappingSummary,
    pub receipt: Option<IngestReceipt>,
}

/// Use case for turning an upload file into bulk ingest requests
pub struct UploadUseCase {
    ingest: Box<dyn BulkIngestPort>,
}

impl UploadUseCase {
    pub fn new(ingest: Box<dyn BulkIngestPort>) -> Self {
        Self { ingest }
    }

    /// Reads and maps a file; the schema comes from the file name.
    pub fn prepare(path: &Path) -> Result<(Schema, Vec<NormalizedRecord>, MappingSummary)> {
        let schema = Schema::from_file_name(path)?;
        let rows = csv_source::read_file(path)?;
        let (records, summary) = map_rows_with_summary(schema, &rows);

        if summary.total_warnings() > 0 {
            warn!(
                file = %path.display(),
                rows_with_warnings = summary.rows_with_warnings,
                "{} mapping fallbacks; the capture service may reject these rows",
                summary.total_warnings()
            );
        }
        Ok((schema, records, summary))
    }

    /// Maps a file and submits it to its schema's bulk endpoint.
    pub async fn upload_file(&self, path: &Path, dry_run: bool) -> Result<UploadReport> {
        let span = tracing::info_span!("upload", file = %path.display());
        self.map_and_submit(path, dry_run).instrument(span).await
    }

    async fn map_and_submit(&self, path: &Path, dry_run: bool) -> Result<UploadReport> {
        let (schema, records, summary) = Self::prepare(path)?;
        info!("Mapped {} {} trades", records.len(), schema);

        if dry_run {
            info!("Dry run, nothing submitted");
            return Ok(UploadReport { file: path.to_path_buf(), summary, receipt: None });
        }

        let receipt = self.ingest.submit(schema, &records).await?;
        info!("Submitted {} trades to {}", receipt.submitted, receipt.endpoint);

        Ok(UploadReport { file: path.to_path_buf(), summary, receipt: Some(receipt) })
    }

    /// Uploads each file in turn; one failing file does not stop the rest.
    pub async fn upload_files(&self, paths: &[PathBuf], dry_run: bool) -> Vec<(PathBuf, Result<UploadReport>)> {
        let mut results = Vec::with_capacity(paths.len());
        for path in paths {
            let result = self.upload_file(path, dry_run).await;
            if let Err(e) = &result {
                warn!("Upload of {} failed: {}", path.display(), e);
            }
            results.push((path.clone(), result));
        }
        results
    }
}
