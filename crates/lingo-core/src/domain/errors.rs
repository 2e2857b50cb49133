//! Errors - オペレーションの終端エラー
//!
//! # 分類
//! - InvalidRequest: 必須項目の欠落・不正（呼び出し側で直せる, 400 相当）
//! - NotFound: 指定キーにレコードがない（404 相当）
//! - Upstream: ストアまたは翻訳サービスの障害（500 相当）
//!
//! Upstream のメッセージは下流のエラー文言をそのまま運びます。

use super::language::LanguageCodeError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LingoError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Upstream(String),
}

impl LingoError {
    pub fn item_not_found() -> Self {
        Self::NotFound("Item not found".to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidRequest(m) | Self::NotFound(m) | Self::Upstream(m) => m,
        }
    }
}

impl From<LanguageCodeError> for LingoError {
    fn from(err: LanguageCodeError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}
