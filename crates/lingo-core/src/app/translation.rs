//! GetTranslation - 翻訳キャッシュの read-through
//!
//! # 状態遷移
//! ```text
//! ValidateKey ──(invalid)──> InvalidRequest
//!    │
//! FetchItem ──(absent)──> NotFound
//!    │
//! ResolveLanguage ──(invalid)──> InvalidRequest（未指定なら en）
//!    │
//! description が空 ─────> NothingToTranslate
//!    │
//! CheckCache ──(hit)────> Cached            （Translator は呼ばない）
//!    │
//! Translate ──(error)───> Upstream
//!    │
//! PersistCache（best-effort: 失敗はログのみ）
//!    │
//!    └──────────────────> Fresh
//! ```
//!
//! # 設計原則
//! - リトライしない（どのステップの失敗もそのリクエストの終端）
//! - キャッシュの書き戻しは revision 条件付き merge（別言語の同時書き込みを失わない）

use tracing::{debug, instrument, warn};

use super::builder::App;
use super::requests::TranslationRequest;
use super::responses::{CACHED_SOURCE_LANGUAGE, NOTHING_TO_TRANSLATE, TranslationResponse};
use crate::domain::{LanguageCode, LingoError};

/// Successful terminal states of GetTranslation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// The item's description is empty.
    NothingToTranslate,

    /// Served from the item's translation cache.
    Cached {
        original: String,
        translated: String,
        target: LanguageCode,
    },

    /// Computed by the translator just now.
    Fresh {
        original: String,
        translated: String,
        target: LanguageCode,
        /// Whether the cache write-back succeeded.
        cache_persisted: bool,
    },
}

impl From<TranslationOutcome> for TranslationResponse {
    fn from(outcome: TranslationOutcome) -> Self {
        match outcome {
            TranslationOutcome::NothingToTranslate => TranslationResponse {
                original: String::new(),
                translated: String::new(),
                target_language_code: None,
                source_language: None,
                message: Some(NOTHING_TO_TRANSLATE.to_string()),
            },
            TranslationOutcome::Cached {
                original,
                translated,
                target,
            } => TranslationResponse {
                original,
                translated,
                target_language_code: Some(target),
                source_language: Some(CACHED_SOURCE_LANGUAGE.to_string()),
                message: None,
            },
            TranslationOutcome::Fresh {
                original,
                translated,
                target,
                ..
            } => TranslationResponse {
                original,
                translated,
                target_language_code: Some(target),
                source_language: None,
                message: None,
            },
        }
    }
}

impl App {
    /// Translate an item's description, reading through its translation cache.
    #[instrument(
        skip(self, request),
        fields(partition_id = %request.partition_id, sort_id = %request.sort_id)
    )]
    pub async fn get_translation(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationOutcome, LingoError> {
        let key = request.key()?;

        let item = self
            .store
            .get(&key)
            .await?
            .ok_or_else(LingoError::item_not_found)?;

        let target = request.language()?;

        if item.description().is_empty() {
            return Ok(TranslationOutcome::NothingToTranslate);
        }

        if let Some(cached) = item.translation_cache().get(&target) {
            debug!(language = %target, "translation cache hit");
            return Ok(TranslationOutcome::Cached {
                original: item.description().to_string(),
                translated: cached.to_string(),
                target,
            });
        }

        let translated = self.translator.translate(item.description(), &target).await?;

        let cache_persisted = match self
            .store
            .merge_translation_entry(&key, &target, &translated)
            .await
        {
            Ok(Some(_)) => true,
            Ok(None) => {
                warn!(
                    %key,
                    language = %target,
                    "item disappeared before the translation could be cached"
                );
                false
            }
            Err(err) => {
                warn!(%key, language = %target, error = %err, "failed to cache translation");
                false
            }
        };

        Ok(TranslationOutcome::Fresh {
            original: item.description().to_string(),
            translated,
            target,
            cache_persisted,
        })
    }
}
