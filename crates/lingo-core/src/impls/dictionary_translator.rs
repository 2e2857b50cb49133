//! Translator answering from a fixed table.
//!
//! 開発用のローカル起動と、テストでの呼び出し回数の検証に使います。

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::LanguageCode;
use crate::ports::{TranslateError, Translator};

#[derive(Debug, Default)]
pub struct DictionaryTranslator {
    entries: HashMap<(String, LanguageCode), String>,
    calls: AtomicUsize,
}

impl DictionaryTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(
        mut self,
        text: impl Into<String>,
        language: LanguageCode,
        translated: impl Into<String>,
    ) -> Self {
        self.insert(text, language, translated);
        self
    }

    pub fn insert(
        &mut self,
        text: impl Into<String>,
        language: LanguageCode,
        translated: impl Into<String>,
    ) {
        self.entries
            .insert((text.into(), language), translated.into());
    }

    /// Number of `translate` calls so far, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for DictionaryTranslator {
    async fn translate(&self, text: &str, target: &LanguageCode) -> Result<String, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries
            .get(&(text.to_string(), target.clone()))
            .cloned()
            .ok_or_else(|| TranslateError::Unsupported {
                text: text.to_string(),
                language: target.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn answers_known_pairs_and_counts_calls() {
        let fr = LanguageCode::parse("fr").unwrap();
        let translator = DictionaryTranslator::new().with_entry("Hello", fr.clone(), "Bonjour");

        assert_eq!(translator.translate("Hello", &fr).await.unwrap(), "Bonjour");

        let err = translator
            .translate("Hello", &LanguageCode::parse("de").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "no translation for 'Hello' into de");
        assert_eq!(translator.calls(), 2);
    }
}
