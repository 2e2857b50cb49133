//! Translator port - 外部の翻訳サービス
//!
//! 翻訳元言語はサービス側で自動判定されます。
//! コアは判定結果を検証も返却もしません。

use async_trait::async_trait;

use crate::domain::{LanguageCode, LingoError};

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The service could not be reached or refused the request.
    #[error("{0}")]
    Unavailable(String),

    /// The translator has no answer for this text/language pair.
    #[error("no translation for '{text}' into {language}")]
    Unsupported { text: String, language: LanguageCode },

    #[error("translation API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<TranslateError> for LingoError {
    fn from(err: TranslateError) -> Self {
        LingoError::Upstream(err.to_string())
    }
}

/// Translator は text を target 言語に翻訳する
///
/// # Thread Safety
/// - `Send + Sync` を要求（プロセス全体で 1 つのハンドルを共有する）
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: &LanguageCode) -> Result<String, TranslateError>;
}
