use lingo_core::app::BuildError;
use lingo_core::ports::TranslateError;

/// Server-wide result type.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors raised while loading configuration and wiring the app.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("translator setup failed: {0}")]
    Translator(#[from] TranslateError),
    #[error("app wiring failed: {0}")]
    Build(#[from] BuildError),
}

impl From<config::ConfigError> for ServerError {
    fn from(err: config::ConfigError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
