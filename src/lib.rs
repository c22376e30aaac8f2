//! InfinityHub - demo backend for a creator platform
//!
//! Serves placeholder REST endpoints for the platform features and an AI
//! assistant whose chat exchanges are kept in an in-process history log.
//! The generative provider is optional; without it every AI call falls back
//! to deterministic local text.

mod config;
pub mod core;
pub mod storage;
pub mod utils;

pub mod api;
pub mod cli;
pub mod server;

pub use api::Assistant;
pub use crate::config::{AIConfig, LoggingConfig, ServerConfig, Settings};
pub use crate::core::generator::{GeneratedBlog, Readiness, ReplyGenerator};
pub use storage::{HistoryStore, InMemoryHistory, InteractionRecord};

use std::sync::Arc;

/// Process-wide state, built once at startup and handed to every consumer
pub struct App {
    pub settings: Settings,
    pub assistant: Arc<Assistant>,
}

impl App {
    /// Decide provider readiness and create an empty history
    pub fn init(settings: Settings) -> Self {
        let readiness = Readiness::initialize(&settings, Settings::api_key());
        Self::with_readiness(settings, readiness)
    }

    pub fn with_readiness(settings: Settings, readiness: Readiness) -> Self {
        let generator = ReplyGenerator::new(readiness, &settings.ai);
        let assistant = Assistant::new(generator, Arc::new(InMemoryHistory::new()));

        tracing::info!(
            "InfinityHub initialized (AI provider ready: {})",
            assistant.is_ready()
        );

        Self {
            settings,
            assistant: Arc::new(assistant),
        }
    }
}
