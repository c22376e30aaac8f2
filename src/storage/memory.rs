//! In-Memory Interaction History
//!
//! Information Hiding:
//! - Record vector and id counter live behind a single RwLock
//! - Appends take the write lock for id assignment and insertion together
//! - Data is lost when the process terminates

use super::{HistoryStore, InteractionRecord};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

struct HistoryLog {
    next_id: u64,
    records: Vec<InteractionRecord>,
}

pub struct InMemoryHistory {
    log: RwLock<HistoryLog>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self {
            log: RwLock::new(HistoryLog {
                next_id: 1,
                records: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistory {
    async fn append(
        &self,
        prompt: &str,
        response: &str,
        category: &str,
    ) -> Result<InteractionRecord> {
        let mut log = self.log.write().await;

        let record = InteractionRecord {
            id: log.next_id,
            prompt: prompt.to_string(),
            response: response.to_string(),
            category: category.to_string(),
            created_at: Utc::now(),
        };
        log.next_id += 1;
        log.records.push(record.clone());

        tracing::debug!(
            "[InMemoryHistory] Appended record {} ({} total)",
            record.id,
            log.records.len()
        );
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<InteractionRecord>> {
        let log = self.log.read().await;
        Ok(log.records.clone())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.log.read().await.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_append_assigns_sequential_ids() {
        let history = InMemoryHistory::new();

        let first = history.append("hello", "AI: hello", "general").await.unwrap();
        let second = history.append("", "AI: ", "support").await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.prompt, "");
        assert_eq!(second.category, "support");
        assert!(second.created_at >= first.created_at);
    }

    #[tokio::test]
    async fn test_list_is_ordered_snapshot() {
        let history = InMemoryHistory::new();
        history.append("a", "1", "general").await.unwrap();
        history.append("b", "2", "general").await.unwrap();

        let mut snapshot = history.list().await.unwrap();
        snapshot.clear();

        let listed = history.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].prompt, "a");
        assert_eq!(listed[1].prompt, "b");
        assert_eq!(history.list().await.unwrap(), listed);
    }

    #[tokio::test]
    async fn test_empty_history() {
        let history = InMemoryHistory::new();
        assert!(history.list().await.unwrap().is_empty());
        assert_eq!(history.len().await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_get_unique_contiguous_ids() {
        let history = Arc::new(InMemoryHistory::new());
        let n = 200u64;

        let handles: Vec<_> = (0..n)
            .map(|i| {
                let history = history.clone();
                tokio::spawn(async move {
                    history
                        .append(&format!("prompt {}", i), "reply", "general")
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }
        assert_eq!(ids, (1..=n).collect::<HashSet<_>>());

        let listed = history.list().await.unwrap();
        assert_eq!(listed.len() as u64, n);
        assert!(listed.windows(2).all(|w| w[1].id == w[0].id + 1));
    }

    #[test]
    fn test_record_wire_format() {
        let record = InteractionRecord {
            id: 7,
            prompt: "hi".to_string(),
            response: "AI: hi".to_string(),
            category: "general".to_string(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["message"], "hi");
        assert_eq!(value["chatType"], "general");
        assert!(value["createdAt"].is_string());
    }
}
