use std::sync::Arc;
use anyhow::Result;

use crate::config::Config;
use crate::crypto::session_token::SessionCodec;
use crate::middleware_layer::route_guard::RouteTable;
use crate::repositories::directory::Directory;

/// The application's state.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<Config>,
    /// Signs and verifies session cookies.
    pub codec: SessionCodec,
    /// Protected and anonymous-only routes.
    pub routes: Arc<RouteTable>,
    /// Users, organizations and TCCs.
    pub directory: Directory,
}

impl AppState {
    /// Creates a new `AppState`, seeding the directory from `DATA_FILE` when set.
    pub async fn new(config: &Config) -> Result<Self> {
        let directory = match &config.data_file {
            Some(path) => Directory::load(path).await?,
            None => {
                tracing::warn!("⚠️ DATA_FILE not set, starting with an empty directory");
                Directory::default()
            }
        };

        Ok(Self::with_directory(config, directory))
    }

    pub fn with_directory(config: &Config, directory: Directory) -> Self {
        let codec = SessionCodec::new(&config.session_secret);
        tracing::info!("✅ Session codec initialized (HS256)");

        AppState {
            config: Arc::new(config.clone()),
            codec,
            routes: Arc::new(RouteTable::default()),
            directory,
        }
    }
}
