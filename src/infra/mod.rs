pub mod http_ingest;

pub use http_ingest::ReqwestBulkIngest;
