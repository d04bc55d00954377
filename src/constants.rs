/// Schema name constants to ensure consistency across the codebase.
/// These define the mapping between CLI names, file name prefixes and endpoints.

// User-facing schema names (used in CLI and logs)
pub const EQUITY_SCHEMA: &str = "equity";
pub const FOREX_SCHEMA: &str = "fx";

// Upload file names must start with one of these (case-insensitive)
pub const EQUITY_FILE_PREFIX: &str = "equity";
pub const FOREX_FILE_PREFIX: &str = "fx";

// Default bulk ingest endpoints of the capture services
pub const DEFAULT_EQUITY_ENDPOINT: &str = "http://localhost:8001/trades/bulk";
pub const DEFAULT_FOREX_ENDPOINT: &str = "http://localhost:8002/forexs/bulk";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

// Environment overrides
pub const ENV_EQUITY_ENDPOINT: &str = "TRADE_MAPPER_EQUITY_ENDPOINT";
pub const ENV_FOREX_ENDPOINT: &str = "TRADE_MAPPER_FOREX_ENDPOINT";
pub const ENV_TIMEOUT_SECONDS: &str = "TRADE_MAPPER_TIMEOUT_SECONDS";
pub const ENV_BATCH_SIZE: &str = "TRADE_MAPPER_BATCH_SIZE";

// Lifecycle event statuses as stored by the lifecycle service
pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_APPROVED: &str = "Approved";

/// Get all supported schema names
pub fn get_supported_schemas() -> Vec<&'static str> {
    vec![EQUITY_SCHEMA, FOREX_SCHEMA]
}
