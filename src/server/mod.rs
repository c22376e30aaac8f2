pub mod api;
mod cors;
pub mod error;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;

use crate::config::ServerConfig;
use crate::App;
use anyhow::{Context, Result};
use tracing::info;

/// HTTP front end for the platform API
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    pub fn new(app: &App) -> Self {
        Self {
            config: app.settings.server.clone(),
            state: AppState::new(app.assistant.clone()),
        }
    }

    pub fn with_address(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.config.host = host;
        }
        if let Some(port) = port {
            self.config.port = port;
        }
        self
    }

    /// Serve until Ctrl-C
    pub async fn run(self) -> Result<()> {
        let app = build_router(self.state, &self.config);
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind to {}", addr))?;
        info!("HTTP server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("HTTP server shutting down");
}
