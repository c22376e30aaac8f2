mod settings;

pub use settings::{AIConfig, LoggingConfig, ServerConfig, Settings};
