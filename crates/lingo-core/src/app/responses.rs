//! Structured responses handed back to the transport untouched.

use serde::Serialize;

use crate::domain::{Item, LanguageCode};

/// Marker echoed as `sourceLanguage` on a cache hit.
pub const CACHED_SOURCE_LANGUAGE: &str = "cached";

pub const NOTHING_TO_TRANSLATE: &str = "description is empty, nothing to translate";

pub const ITEM_UPDATED: &str = "Item updated successfully";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub original: String,
    pub translated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemResponse {
    pub message: String,
    pub updated_item: Item,
}

impl UpdateItemResponse {
    pub fn new(updated_item: Item) -> Self {
        Self {
            message: ITEM_UPDATED.to_string(),
            updated_item,
        }
    }
}

/// `{message}` - the body of every failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
