use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown file type '{0}': file name must start with 'equity' or 'fx'")]
    UnknownFileType(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// A later batch failed after earlier batches were stored.
    #[error("Upload stopped after {submitted} records were stored in {requests} request(s): {source}")]
    PartialUpload {
        submitted: usize,
        accepted: usize,
        requests: usize,
        #[source]
        source: Box<MapperError>,
    },
}

pub type Result<T> = std::result::Result<T, MapperError>;
