use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub ai: AIConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `*` or an empty list allows any origin
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub base_url: String,
    pub chat_model: String,
    pub ideas_model: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_env = env::var("CONFIG_ENV").unwrap_or_else(|_| "default".to_string());

        let config = Self::builder()?
            .add_source(File::with_name(&format!("config/{}", config_env)).required(false))
            .add_source(Self::environment())
            .build()?;

        config.try_deserialize()
    }

    /// Load from an explicit file. Environment overrides still apply.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::builder()?
            .add_source(File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?;

        config.try_deserialize()
    }

    /// Gemini credential, if one was supplied.
    pub fn api_key() -> Option<String> {
        env::var("GEMINI_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    /// `APP__SECTION__KEY` overrides; list keys take comma-separated values.
    fn environment() -> Environment {
        Environment::with_prefix("APP")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("server.cors_origins")
            .try_parsing(true)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.cors_origins", vec!["*"])?
            .set_default("ai.base_url", "https://generativelanguage.googleapis.com")?
            .set_default("ai.chat_model", "gemini-2.0-flash")?
            .set_default("ai.ideas_model", "gemini-2.0-flash")?
            .set_default("ai.max_output_tokens", 1024)?
            .set_default("ai.temperature", 0.7)?
            .set_default("ai.request_timeout_secs", 30)?
            .set_default("logging.level", "info")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                cors_origins: vec!["*".to_string()],
            },
            ai: AIConfig {
                base_url: "https://generativelanguage.googleapis.com".to_string(),
                chat_model: "gemini-2.0-flash".to_string(),
                ideas_model: "gemini-2.0-flash".to_string(),
                max_output_tokens: 1024,
                temperature: 0.7,
                request_timeout_secs: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9100\n\n[ai]\nchat_model = \"gemini-2.5-flash\""
        )
        .unwrap();

        let settings = Settings::from_file(file.path()).unwrap();

        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.ai.chat_model, "gemini-2.5-flash");
        assert_eq!(settings.ai.ideas_model, "gemini-2.0-flash");
        assert_eq!(settings.ai.request_timeout_secs, 30);
    }

    // Only test touching APP__SERVER__CORS_ORIGINS; the others leave it unset.
    #[test]
    fn test_env_overrides_cors_origins_list() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();

        env::set_var("APP__SERVER__CORS_ORIGINS", "*");
        let wildcard = Settings::from_file(file.path());

        env::set_var(
            "APP__SERVER__CORS_ORIGINS",
            "http://localhost:5173,https://hub.example.com",
        );
        let listed = Settings::from_file(file.path());

        env::remove_var("APP__SERVER__CORS_ORIGINS");

        assert_eq!(wildcard.unwrap().server.cors_origins, vec!["*".to_string()]);
        assert_eq!(
            listed.unwrap().server.cors_origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://hub.example.com".to_string()
            ]
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::from_file(dir.path().join("absent.toml"));
        assert!(result.is_err());
    }
}
