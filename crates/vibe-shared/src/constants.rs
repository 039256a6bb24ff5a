//! Application-wide constants

pub const API_PREFIX: &str = "/api/v1";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 3;
pub const MAX_SLUG_LENGTH: usize = 50;
pub const LOG_FILE_PREFIX: &str = "vibe-server.log";
