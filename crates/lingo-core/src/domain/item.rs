//! Item record and its composite key.

use serde::{Deserialize, Serialize};

use super::cache::TranslationCache;
use super::errors::LingoError;

/// Sort id used when the caller does not supply one at creation.
pub const DEFAULT_SORT_ID: &str = "defaultSK";

/// Description used when the caller does not supply one at creation.
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// `(partitionId, sortId)` - the only addressing an item has.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey {
    partition_id: String,
    sort_id: String,
}

impl ItemKey {
    /// Both parts must be non-empty.
    pub fn new(
        partition_id: impl Into<String>,
        sort_id: impl Into<String>,
    ) -> Result<Self, LingoError> {
        let partition_id = partition_id.into();
        let sort_id = sort_id.into();
        if partition_id.is_empty() || sort_id.is_empty() {
            return Err(LingoError::InvalidRequest(
                "partitionId and sortId are required".to_string(),
            ));
        }
        Ok(Self {
            partition_id,
            sort_id,
        })
    }

    pub fn partition_id(&self) -> &str {
        &self.partition_id
    }

    pub fn sort_id(&self) -> &str {
        &self.sort_id
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.partition_id, self.sort_id)
    }
}

/// A stored "thing".
///
/// Design:
/// - Key fields are fixed at construction; only `description` and the
///   translation cache change afterwards.
/// - `translationCache` is omitted from the JSON shape while it is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    partition_id: String,
    sort_id: String,
    description: String,
    #[serde(default, skip_serializing_if = "TranslationCache::is_empty")]
    translation_cache: TranslationCache,
}

impl Item {
    pub fn new(key: ItemKey, description: impl Into<String>) -> Self {
        Self {
            partition_id: key.partition_id,
            sort_id: key.sort_id,
            description: description.into(),
            translation_cache: TranslationCache::new(),
        }
    }

    pub fn key(&self) -> ItemKey {
        ItemKey {
            partition_id: self.partition_id.clone(),
            sort_id: self.sort_id.clone(),
        }
    }

    pub fn partition_id(&self) -> &str {
        &self.partition_id
    }

    pub fn sort_id(&self) -> &str {
        &self.sort_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn translation_cache(&self) -> &TranslationCache {
        &self.translation_cache
    }

    /// Replace the description. The translation cache is left as-is.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn translation_cache_mut(&mut self) -> &mut TranslationCache {
        &mut self.translation_cache
    }

    pub fn with_translation_cache(mut self, cache: TranslationCache) -> Self {
        self.translation_cache = cache;
        self
    }
}
