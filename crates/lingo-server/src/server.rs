//! Wiring: one store and one translator per process.

use std::sync::Arc;
use std::time::Duration;

use lingo_core::app::{App, AppBuilder};
use lingo_core::domain::LanguageCode;
use lingo_core::impls::{DictionaryTranslator, HttpTranslator, InMemoryItemStore};
use lingo_core::ports::Translator;
use tracing::info;

use crate::config::{ServerConfig, TranslatorBackend, TranslatorConfig};
use crate::error::{Result, ServerError};

/// Build the translator selected by `config.backend`.
pub fn build_translator(config: &TranslatorConfig) -> Result<Arc<dyn Translator>> {
    match config.backend {
        TranslatorBackend::Http => {
            let mut translator = HttpTranslator::with_timeout(
                config.base_url.clone(),
                Duration::from_secs(config.timeout_secs),
            )?;
            if let Some(api_key) = &config.api_key {
                translator = translator.with_api_key(api_key.clone());
            }
            info!(base_url = %config.base_url, "using HTTP translator");
            Ok(Arc::new(translator))
        }
        TranslatorBackend::Dictionary => {
            let mut translator = DictionaryTranslator::new();
            for entry in &config.entries {
                let language = LanguageCode::parse(&entry.language)
                    .map_err(|err| ServerError::InvalidConfig(err.to_string()))?;
                translator.insert(entry.text.clone(), language, entry.translated.clone());
            }
            info!(entries = config.entries.len(), "using dictionary translator");
            Ok(Arc::new(translator))
        }
    }
}

/// Build the app with an in-memory store and the configured translator.
pub fn build_app(config: &ServerConfig) -> Result<App> {
    let app = AppBuilder::new()
        .store(Arc::new(InMemoryItemStore::new()))
        .translator(build_translator(&config.translator)?)
        .build()?;
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DictionaryEntry;

    #[tokio::test]
    async fn dictionary_backend_answers_from_entries() {
        let config = TranslatorConfig {
            backend: TranslatorBackend::Dictionary,
            entries: vec![DictionaryEntry {
                text: "Hello".into(),
                language: "FR".into(),
                translated: "Bonjour".into(),
            }],
            ..TranslatorConfig::default()
        };

        let translator = build_translator(&config).unwrap();
        let fr = LanguageCode::parse("fr").unwrap();

        assert_eq!(translator.translate("Hello", &fr).await.unwrap(), "Bonjour");
    }

    #[test]
    fn default_config_builds() {
        assert!(build_app(&ServerConfig::default()).is_ok());
    }
}
