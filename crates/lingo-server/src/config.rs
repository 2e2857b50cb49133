use std::net::SocketAddr;
use std::path::Path;

use config::ConfigBuilder;
use config::builder::DefaultState;
use lingo_core::domain::LanguageCode;
use serde::Deserialize;

use crate::error::{Result, ServerError};

/// Server configuration options.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP bind address.
    pub http_bind: SocketAddr,
    /// Translation backend.
    pub translator: TranslatorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            translator: TranslatorConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorBackend {
    /// LibreTranslate-compatible HTTP service.
    #[default]
    Http,
    /// Fixed table from `entries`; no network.
    Dictionary,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub backend: TranslatorBackend,
    /// Base URL of the translation service (`http` backend).
    pub base_url: String,
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Table for the `dictionary` backend.
    pub entries: Vec<DictionaryEntry>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            backend: TranslatorBackend::Http,
            base_url: lingo_core::impls::http_translator::DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: lingo_core::impls::http_translator::DEFAULT_TIMEOUT.as_secs(),
            entries: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DictionaryEntry {
    pub text: String,
    pub language: String,
    pub translated: String,
}

impl ServerConfig {
    /// Load config from TOML and environment variables.
    ///
    /// Environment variables use `LINGO__` prefix with `__` separators,
    /// e.g. `LINGO__TRANSLATOR__BASE_URL`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        } else {
            builder = builder.add_source(config::File::with_name("lingo").required(false));
        }
        builder = builder.add_source(config::Environment::with_prefix("LINGO").separator("__"));
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    pub fn validate(&self) -> Result<()> {
        let translator = &self.translator;
        if translator.timeout_secs == 0 {
            return Err(ServerError::InvalidConfig(
                "translator.timeout_secs must be greater than 0".into(),
            ));
        }
        match translator.backend {
            TranslatorBackend::Http => {
                if !(translator.base_url.starts_with("http://")
                    || translator.base_url.starts_with("https://"))
                {
                    return Err(ServerError::InvalidConfig(
                        "translator.base_url must start with http:// or https://".into(),
                    ));
                }
            }
            TranslatorBackend::Dictionary => {
                for entry in &translator.entries {
                    LanguageCode::parse(&entry.language).map_err(|err| {
                        ServerError::InvalidConfig(format!("translator.entries: {err}"))
                    })?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_toml(toml: &str) -> Result<ServerConfig> {
        ServerConfig::from_builder(
            config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.translator.backend, TranslatorBackend::Http);
        assert_eq!(config.http_bind.port(), 3000);
    }

    #[test]
    fn loads_dictionary_backend_from_toml() {
        let config = from_toml(
            r#"
            http_bind = "0.0.0.0:8080"

            [translator]
            backend = "dictionary"

            [[translator.entries]]
            text = "Hello"
            language = "fr"
            translated = "Bonjour"
            "#,
        )
        .unwrap();

        assert_eq!(config.http_bind.port(), 8080);
        assert_eq!(config.translator.backend, TranslatorBackend::Dictionary);
        assert_eq!(
            config.translator.entries,
            vec![DictionaryEntry {
                text: "Hello".into(),
                language: "fr".into(),
                translated: "Bonjour".into(),
            }]
        );
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = from_toml("[translator]\ntimeout_secs = 0\n").unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = from_toml("[translator]\nbase_url = \"localhost:5000\"\n").unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn rejects_bad_dictionary_language() {
        let err = from_toml(
            r#"
            [translator]
            backend = "dictionary"
            entries = [{ text = "Hello", language = "?", translated = "x" }]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ServerError::InvalidConfig(_)));
    }
}
