//! Typed requests for the five operations.
//!
//! Transport adapters build these from paths, query strings and bodies.
//! Empty strings count as "not supplied" everywhere.

use serde::Deserialize;

use crate::domain::{DEFAULT_DESCRIPTION, DEFAULT_SORT_ID, ItemKey, LanguageCode, LingoError};
use crate::ports::IdGenerator;

/// `Some("")` -> `None`.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Body of CreateItem. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateItemRequest {
    #[serde(alias = "pk")]
    pub partition_id: Option<String>,
    #[serde(alias = "sk")]
    pub sort_id: Option<String>,
    pub description: Option<String>,
}

impl CreateItemRequest {
    /// Fill in defaults: generated partition id, `defaultSK`, `No description`.
    pub(crate) fn resolve(self, ids: &dyn IdGenerator) -> Result<(ItemKey, String), LingoError> {
        let partition_id =
            supplied(self.partition_id).unwrap_or_else(|| ids.generate_partition_id());
        let sort_id = supplied(self.sort_id).unwrap_or_else(|| DEFAULT_SORT_ID.to_string());
        let description =
            supplied(self.description).unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
        Ok((ItemKey::new(partition_id, sort_id)?, description))
    }
}

/// Body of UpdateItem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateItemBody {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateItemRequest {
    pub partition_id: String,
    pub sort_id: String,
    pub description: Option<String>,
}

impl UpdateItemRequest {
    pub fn new(
        partition_id: impl Into<String>,
        sort_id: impl Into<String>,
        body: UpdateItemBody,
    ) -> Self {
        Self {
            partition_id: partition_id.into(),
            sort_id: sort_id.into(),
            description: body.description,
        }
    }

    /// Addressing is checked before the payload.
    pub(crate) fn validate(self) -> Result<(ItemKey, String), LingoError> {
        let key = ItemKey::new(self.partition_id, self.sort_id)?;
        let description = supplied(self.description).ok_or_else(|| {
            LingoError::InvalidRequest("description field is required in the body".to_string())
        })?;
        Ok((key, description))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionQuery {
    pub partition_id: String,
    pub filter: Option<String>,
}

impl PartitionQuery {
    pub fn new(partition_id: impl Into<String>, filter: Option<String>) -> Self {
        Self {
            partition_id: partition_id.into(),
            filter,
        }
    }

    pub(crate) fn validate(self) -> Result<(String, Option<String>), LingoError> {
        if self.partition_id.is_empty() {
            return Err(LingoError::InvalidRequest(
                "partitionId is required".to_string(),
            ));
        }
        Ok((self.partition_id, supplied(self.filter)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRequest {
    pub partition_id: String,
    pub sort_id: String,
    pub language: Option<String>,
}

impl TranslationRequest {
    pub fn new(
        partition_id: impl Into<String>,
        sort_id: impl Into<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            partition_id: partition_id.into(),
            sort_id: sort_id.into(),
            language,
        }
    }

    pub(crate) fn key(&self) -> Result<ItemKey, LingoError> {
        ItemKey::new(self.partition_id.as_str(), self.sort_id.as_str())
    }

    /// Missing or empty language resolves to `en`.
    pub(crate) fn language(&self) -> Result<LanguageCode, LingoError> {
        Ok(LanguageCode::resolve(self.language.as_deref())?)
    }
}
