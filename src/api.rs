//! Simple async API facade
//!
//! Ties the reply generator to the history store. Generation always runs
//! outside the store's lock; only the append step is serialized.

use crate::core::generator::{GeneratedBlog, ReplyGenerator};
use crate::storage::{HistoryStore, InteractionRecord};
use anyhow::Result;
use std::sync::Arc;

pub const DEFAULT_CATEGORY: &str = "general";

pub struct Assistant {
    generator: ReplyGenerator,
    history: Arc<dyn HistoryStore>,
}

impl Assistant {
    pub fn new(generator: ReplyGenerator, history: Arc<dyn HistoryStore>) -> Self {
        Self { generator, history }
    }

    pub fn is_ready(&self) -> bool {
        self.generator.is_ready()
    }

    /// Generate a reply and log the exchange
    ///
    /// # Example
    /// ```no_run
    /// use infinityhub::{App, Settings};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let app = App::init(Settings::new()?);
    ///     let record = app.assistant.submit_chat("What is Rust?", None).await?;
    ///     println!("#{} {}", record.id, record.response);
    ///     Ok(())
    /// }
    /// ```
    pub async fn submit_chat(
        &self,
        prompt: &str,
        category: Option<&str>,
    ) -> Result<InteractionRecord> {
        let reply = self.generator.generate_reply(prompt).await;
        let category = category.unwrap_or(DEFAULT_CATEGORY);
        self.history.append(prompt, &reply, category).await
    }

    /// Ideas are not logged.
    pub async fn content_ideas(&self, topic: &str) -> Vec<String> {
        self.generator.generate_ideas(topic).await
    }

    pub async fn generate_blog(&self, topic: &str, title: Option<&str>) -> GeneratedBlog {
        self.generator.generate_blog(topic, title).await
    }

    pub async fn chat_history(&self) -> Result<Vec<InteractionRecord>> {
        self.history.list().await
    }

    pub async fn history_len(&self) -> Result<usize> {
        self.history.len().await
    }
}

pub mod batch {
    use super::*;
    use futures::stream::{self, StreamExt};

    /// Submit every prompt as a chat message with bounded concurrency
    pub async fn submit_prompts(
        assistant: &Assistant,
        prompts: Vec<String>,
        concurrency: usize,
    ) -> Vec<Result<InteractionRecord>> {
        stream::iter(prompts)
            .map(|prompt| async move { assistant.submit_chat(&prompt, None).await })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await
    }
}
