pub mod ports;
pub mod upload_use_case;
