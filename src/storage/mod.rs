//! Interaction History Storage
//!
//! Information Hiding:
//! - Sequence counter and record layout hidden behind trait
//! - Id assignment happens inside the store, never by callers
//! - Backends can be swapped without touching the orchestration layer

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod memory;

pub use memory::InMemoryHistory;

/// One logged chat exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    pub id: u64,
    #[serde(rename = "message")]
    pub prompt: String,
    pub response: String,
    #[serde(rename = "chatType")]
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only, ordered interaction log
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Store a new record with the next id and the current UTC time
    async fn append(&self, prompt: &str, response: &str, category: &str)
        -> Result<InteractionRecord>;

    /// Snapshot of all records, oldest first
    async fn list(&self) -> Result<Vec<InteractionRecord>>;

    async fn len(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }
}
