//! LogTail server implementation

pub mod http;
pub mod verdict;
pub mod watch;

use crate::config::ServerConfig;
use crate::{Result, TailError};
use std::path::PathBuf;
use tracing::info;

pub use http::{router, AppState};
pub use watch::WatchSet;

/// Main LogTail server that ties the watch set to the HTTP runtime
pub struct TailServer {
    config: ServerConfig,
    watch: WatchSet,
}

impl TailServer {
    /// Create a new server, opening every watched file.
    ///
    /// Fails if the configuration is invalid or any file cannot be opened;
    /// the server never starts with a partial watch set.
    pub async fn new(config: ServerConfig, watch_paths: &[PathBuf]) -> Result<Self> {
        config.validate()?;
        let watch = WatchSet::open(watch_paths).await?;

        Ok(Self { config, watch })
    }

    /// Bind the listening socket and serve until the process terminates.
    pub async fn start(self) -> Result<()> {
        let addr = self.config.listen_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TailError::Server(format!("Failed to bind {}: {}", addr, e)))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| TailError::Server(format!("Failed to read local address: {}", e)))?;

        info!("Watching {} log files", self.watch.len());
        info!("Started instrumentation HTTP server on {}", local_addr);

        let app = http::router(AppState::new(self.watch));
        axum::serve(listener, app)
            .await
            .map_err(|e| TailError::Server(format!("Server error: {}", e)))?;

        Ok(())
    }
}
