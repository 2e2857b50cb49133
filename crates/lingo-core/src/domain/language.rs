//! LanguageCode - 翻訳先言語コード
//!
//! translationCache のキーは小文字の言語コードに正規化されます。
//! 正規化はここだけで行い、それ以外の層は `LanguageCode` を受け取るだけにします。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 呼び出し側が言語を指定しなかった場合の翻訳先
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 16;

/// LanguageCode は正規化済み（trim + lowercase）の言語コード
///
/// # 受け付ける形式
/// - 2〜16 文字
/// - ASCII 英数字と `-` のみ（例: `fr`, `pt-br`, `zh-tw`）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageCodeError {
    #[error("language code is empty")]
    Empty,

    #[error("language code '{0}' must be 2-16 ASCII letters, digits or '-'")]
    Malformed(String),
}

impl LanguageCode {
    pub fn parse(raw: &str) -> Result<Self, LanguageCodeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LanguageCodeError::Empty);
        }

        let len_ok = (MIN_LEN..=MAX_LEN).contains(&trimmed.len());
        let chars_ok = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !len_ok || !chars_ok {
            return Err(LanguageCodeError::Malformed(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// 未指定（None または空文字）なら `DEFAULT_TARGET_LANGUAGE` を返す
    pub fn resolve(requested: Option<&str>) -> Result<Self, LanguageCodeError> {
        match requested.map(str::trim) {
            None | Some("") => Ok(Self::default_target()),
            Some(raw) => Self::parse(raw),
        }
    }

    pub fn default_target() -> Self {
        Self(DEFAULT_TARGET_LANGUAGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = LanguageCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}
