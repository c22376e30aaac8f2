//! Reply Generator
//!
//! Produces chat replies, content ideas and blog drafts through the generative
//! provider when one was configured at startup, and falls back to deterministic
//! local text otherwise. None of the public operations can fail.

use crate::config::{AIConfig, Settings};
use crate::core::llm::{GeminiClient, GenerationError, TextGenerator};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_IDEAS: usize = 8;

// Bullets and numbering need trailing whitespace so `**bold**` and `2.0` survive.
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:-+\s*|[*•](?:\s+|$)|\d+[.)](?:\s+|$))").expect("valid list marker regex")
});

/// Outcome of provider setup, decided once per process.
#[derive(Clone)]
pub enum Readiness {
    Ready(Arc<dyn TextGenerator>),
    Unavailable,
}

impl Readiness {
    /// Build the provider client. Any failure leaves the process permanently unavailable.
    pub fn initialize(settings: &Settings, api_key: Option<String>) -> Self {
        let Some(api_key) = api_key else {
            tracing::info!("GEMINI_API_KEY not set, AI responses will use local fallbacks");
            return Readiness::Unavailable;
        };

        match GeminiClient::new(api_key, settings.ai.clone()) {
            Ok(client) => {
                tracing::info!(
                    "Gemini provider ready (chat: {}, ideas: {})",
                    settings.ai.chat_model,
                    settings.ai.ideas_model
                );
                Readiness::Ready(Arc::new(client))
            }
            Err(e) => {
                tracing::warn!("Gemini provider initialization failed, using fallbacks: {}", e);
                Readiness::Unavailable
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready(_))
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        match self {
            Readiness::Ready(provider) => provider.generate(model, prompt).await,
            Readiness::Unavailable => Err(GenerationError::Unavailable),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedBlog {
    pub title: String,
    pub content: String,
}

pub struct ReplyGenerator {
    readiness: Readiness,
    chat_model: String,
    ideas_model: String,
}

impl ReplyGenerator {
    pub fn new(readiness: Readiness, config: &AIConfig) -> Self {
        Self {
            readiness,
            chat_model: config.chat_model.clone(),
            ideas_model: config.ideas_model.clone(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.readiness.is_ready()
    }

    pub async fn generate_reply(&self, prompt: &str) -> String {
        let request = format!(
            "You are InfinityHub's assistant. Be concise and helpful.\nUser: {}",
            prompt
        );

        match self.readiness.generate(&self.chat_model, &request).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    tracing::warn!("[ReplyGenerator] Empty chat reply, using fallback");
                    fallback_reply(prompt)
                } else {
                    text.to_string()
                }
            }
            Err(GenerationError::Unavailable) => fallback_reply(prompt),
            Err(e) => {
                tracing::warn!("[ReplyGenerator] Chat reply failed, using fallback: {}", e);
                fallback_reply(prompt)
            }
        }
    }

    pub async fn generate_ideas(&self, topic: &str) -> Vec<String> {
        let request = format!(
            "List {} creative, specific content ideas for '{}'. One per line.",
            MAX_IDEAS, topic
        );

        match self.readiness.generate(&self.ideas_model, &request).await {
            Ok(text) => {
                let ideas = parse_ideas(&text);
                if ideas.is_empty() {
                    tracing::warn!("[ReplyGenerator] No ideas parsed for '{}', using fallback", topic);
                    fallback_ideas(topic)
                } else {
                    ideas
                }
            }
            Err(GenerationError::Unavailable) => fallback_ideas(topic),
            Err(e) => {
                tracing::warn!("[ReplyGenerator] Idea generation failed, using fallback: {}", e);
                fallback_ideas(topic)
            }
        }
    }

    pub async fn generate_blog(&self, topic: &str, title: Option<&str>) -> GeneratedBlog {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Generated: {}", topic));

        let request = format!(
            "You are a professional content writer. Write a well-structured blog post with an \
             introduction, body sections with subheadings and a conclusion. Use markdown.\n\n\
             Topic: {}",
            topic
        );

        let content = match self.readiness.generate(&self.chat_model, &request).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                tracing::warn!("[ReplyGenerator] Empty blog draft, using fallback");
                fallback_blog(topic)
            }
            Err(GenerationError::Unavailable) => fallback_blog(topic),
            Err(e) => {
                tracing::warn!("[ReplyGenerator] Blog generation failed, using fallback: {}", e);
                fallback_blog(topic)
            }
        };

        GeneratedBlog { title, content }
    }
}

fn fallback_reply(prompt: &str) -> String {
    format!("AI: {}", prompt)
}

fn fallback_ideas(topic: &str) -> Vec<String> {
    vec![
        format!("Idea about {} #1", topic),
        format!("Idea about {} #2", topic),
    ]
}

fn fallback_blog(topic: &str) -> String {
    format!("Auto content for {}", topic)
}

/// One idea per non-blank line, list markers removed, capped at eight.
fn parse_ideas(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| LIST_MARKER.replace(line.trim(), "").trim().to_string())
        .filter(|line| !line.is_empty())
        .take(MAX_IDEAS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Scripted provider: replays a fixed outcome and records prompts.
    struct ScriptedProvider {
        outcome: Result<String, String>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(vec![]),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                outcome: Err("connection reset".to_string()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(vec![]),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedProvider {
        async fn generate(&self, _model: &str, prompt: &str) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.outcome.clone().map_err(GenerationError::Failed)
        }
    }

    fn generator(readiness: Readiness) -> ReplyGenerator {
        ReplyGenerator::new(readiness, &Settings::default().ai)
    }

    #[tokio::test]
    async fn test_reply_not_ready_echoes_prompt() {
        let generator = generator(Readiness::Unavailable);
        assert!(!generator.is_ready());
        assert_eq!(generator.generate_reply("").await, "AI: ");
        assert_eq!(generator.generate_reply("hello").await, "AI: hello");
    }

    #[tokio::test]
    async fn test_reply_trims_provider_text() {
        let provider = ScriptedProvider::ok("  Hi there!  ");
        let generator = generator(Readiness::Ready(provider.clone()));

        assert_eq!(generator.generate_reply("hello").await, "Hi there!");

        let prompts = provider.prompts.lock().unwrap();
        assert!(prompts[0].starts_with("You are InfinityHub's assistant."));
        assert!(prompts[0].ends_with("User: hello"));
    }

    #[tokio::test]
    async fn test_reply_error_falls_back_after_single_attempt() {
        let provider = ScriptedProvider::failing();
        let generator = generator(Readiness::Ready(provider.clone()));

        assert_eq!(generator.generate_reply("hello").await, "AI: hello");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_reply_whitespace_only_falls_back() {
        let generator = generator(Readiness::Ready(ScriptedProvider::ok(" \n\t ")));
        assert_eq!(generator.generate_reply("hello").await, "AI: hello");
    }

    #[tokio::test]
    async fn test_ideas_not_ready() {
        let generator = generator(Readiness::Unavailable);
        assert_eq!(
            generator.generate_ideas("music").await,
            vec!["Idea about music #1", "Idea about music #2"]
        );
    }

    #[tokio::test]
    async fn test_ideas_keep_first_eight_clean_lines() {
        let response = "- Idea one\n\n* Idea two\n1. Idea three\n   \n**Podcast series**: weekly episodes\n\
                        2.0 launch party recap\n\n2) Idea six\n- Idea seven\n\n- Idea eight\n- Idea nine\n- Idea ten\n";
        let generator = generator(Readiness::Ready(ScriptedProvider::ok(response)));

        let ideas = generator.generate_ideas("music").await;

        assert_eq!(
            ideas,
            vec![
                "Idea one",
                "Idea two",
                "Idea three",
                "**Podcast series**: weekly episodes",
                "2.0 launch party recap",
                "Idea six",
                "Idea seven",
                "Idea eight",
            ]
        );
    }

    #[tokio::test]
    async fn test_ideas_blank_response_falls_back() {
        let generator = generator(Readiness::Ready(ScriptedProvider::ok("\n  \n- \n")));
        assert_eq!(
            generator.generate_ideas("music").await,
            vec!["Idea about music #1", "Idea about music #2"]
        );
    }

    #[tokio::test]
    async fn test_ideas_error_falls_back() {
        let generator = generator(Readiness::Ready(ScriptedProvider::failing()));
        assert_eq!(generator.generate_ideas("rust").await.len(), 2);
    }

    #[tokio::test]
    async fn test_blog_fallback_and_title() {
        let generator = generator(Readiness::Unavailable);

        let blog = generator.generate_blog("rust", None).await;
        assert_eq!(blog.title, "Generated: rust");
        assert_eq!(blog.content, "Auto content for rust");

        let blog = generator.generate_blog("rust", Some("My Post")).await;
        assert_eq!(blog.title, "My Post");
    }

    #[tokio::test]
    async fn test_blog_uses_provider_text() {
        let generator = generator(Readiness::Ready(ScriptedProvider::ok("\n# Rust\n\nBody\n")));
        let blog = generator.generate_blog("rust", Some("  ")).await;

        assert_eq!(blog.title, "Generated: rust");
        assert_eq!(blog.content, "# Rust\n\nBody");
    }

    #[test]
    fn test_initialize_without_key_is_unavailable() {
        let readiness = Readiness::initialize(&Settings::default(), None);
        assert!(!readiness.is_ready());
    }

    #[test]
    fn test_initialize_with_key_is_ready() {
        let readiness = Readiness::initialize(&Settings::default(), Some("key".to_string()));
        assert!(readiness.is_ready());
    }
}
