use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "sift";
pub const PROGRAM_LOG_LEVEL: &str = "SIFT_LOG_LEVEL";

/// Root directory a scan starts from when the caller names none.
pub fn default_scan_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
