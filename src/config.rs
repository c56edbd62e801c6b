use std::path::PathBuf;

pub const BIND_ADDR: &str = "0.0.0.0:5000";
pub const SCRATCH_DIR: &str = "/tmp";

// Where the service listens and where downloads land. Both are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub scratch_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: BIND_ADDR.to_string(),
            scratch_dir: PathBuf::from(SCRATCH_DIR),
        }
    }
}
