use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Client;

use crate::config::AppConfig;
use crate::intake::download::build_client;
use crate::processing::{DocumentProcessor, PlaceholderProcessor};

// Everything a handler needs, shared across requests behind an Arc.
pub struct AppState {
    pub client: Client,
    pub scratch_dir: PathBuf,
    pub processor: Arc<dyn DocumentProcessor>,
}

impl AppState {
    pub fn new(client: Client, scratch_dir: PathBuf, processor: Arc<dyn DocumentProcessor>) -> Self {
        Self {
            client,
            scratch_dir,
            processor,
        }
    }

    pub fn from_config(config: &AppConfig) -> reqwest::Result<Self> {
        Ok(Self::new(
            build_client()?,
            config.scratch_dir.clone(),
            Arc::new(PlaceholderProcessor),
        ))
    }
}
