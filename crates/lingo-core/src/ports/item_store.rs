//! ItemStore port - Item の正本（source of truth）
//!
//! ItemStore は `(partitionId, sortId) -> Item` のフラットなマップです。
//!
//! # 楽観的排他制御
//! 各レコードは単調増加する `Revision` を持ちます（Item の JSON 形状には出ません）。
//! `update_description` と `merge_translation_entry` は
//! 「読む → 変更 → `put_if_revision`」で実装し、
//! 競合したら読み直して再適用します（最大 `MAX_CONDITIONAL_ATTEMPTS` 回）。
//! これにより、同じ Item に対する別言語のキャッシュ追記が互いを消すことはありません。
//!
//! `put` は無条件上書き（last-writer-wins）のままです。

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{Item, ItemKey, LanguageCode, LingoError, TranslationCache};

/// 条件付き書き込みを読み直して再適用する上限
pub const MAX_CONDITIONAL_ATTEMPTS: usize = 5;

/// Per-record revision. Bumped on every successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Revision(u64);

impl Revision {
    pub const INITIAL: Revision = Revision(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A value paired with the revision it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<T> {
    pub value: T,
    pub revision: Revision,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached or failed the operation.
    #[error("{0}")]
    Unavailable(String),

    /// A conditional write saw a different revision than expected.
    #[error("conditional write on {key} lost to a concurrent writer")]
    Conflict { key: String },
}

impl From<StoreError> for LingoError {
    fn from(err: StoreError) -> Self {
        LingoError::Upstream(err.to_string())
    }
}

/// ItemStore port (interface).
///
/// 必須メソッドはストアのプリミティブだけです。
/// `update_description` / `merge_translation_entry` はその上に組み立てた既定実装を持ちます。
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a new or replacement record. Returns the record it replaced, if any.
    async fn put(&self, item: Item) -> Result<Option<Item>, StoreError>;

    /// Point read including the current revision. `Ok(None)` is a normal outcome.
    async fn get_versioned(&self, key: &ItemKey) -> Result<Option<Versioned<Item>>, StoreError>;

    /// Write `item` only if the stored record is still at `expected`.
    ///
    /// A missing record or a different revision yields `StoreError::Conflict`.
    async fn put_if_revision(&self, item: Item, expected: Revision)
    -> Result<Revision, StoreError>;

    /// Items with exactly this partition id; with `filter`, only those whose
    /// description contains it (case-sensitive). No ordering guarantee.
    async fn query(&self, partition_id: &str, filter: Option<&str>)
    -> Result<Vec<Item>, StoreError>;

    /// Every item in the store. Unbounded; small datasets only.
    async fn scan_all(&self) -> Result<Vec<Item>, StoreError>;

    async fn get(&self, key: &ItemKey) -> Result<Option<Item>, StoreError> {
        Ok(self.get_versioned(key).await?.map(|v| v.value))
    }

    /// Replace `description` in place. `Ok(None)` if there is no such record.
    async fn update_description(
        &self,
        key: &ItemKey,
        description: &str,
    ) -> Result<Option<Item>, StoreError> {
        update_conditionally(self, key, |item| item.set_description(description)).await
    }

    /// Add `{language: text}` to the item's cache, keeping every existing entry.
    ///
    /// An entry already present for `language` is kept as-is.
    /// Returns the merged cache, or `Ok(None)` if there is no such record.
    async fn merge_translation_entry(
        &self,
        key: &ItemKey,
        language: &LanguageCode,
        text: &str,
    ) -> Result<Option<TranslationCache>, StoreError> {
        let updated = update_conditionally(self, key, |item| {
            item.translation_cache_mut()
                .insert_if_absent(language.clone(), text);
        })
        .await?;
        Ok(updated.map(|item| item.translation_cache().clone()))
    }
}

/// read → apply → put_if_revision を競合がなくなるまで（上限あり）繰り返す
async fn update_conditionally<S, F>(
    store: &S,
    key: &ItemKey,
    mut apply: F,
) -> Result<Option<Item>, StoreError>
where
    S: ItemStore + ?Sized,
    F: FnMut(&mut Item) + Send,
{
    for attempt in 1..=MAX_CONDITIONAL_ATTEMPTS {
        let Some(current) = store.get_versioned(key).await? else {
            return Ok(None);
        };

        let mut item = current.value;
        apply(&mut item);

        match store.put_if_revision(item.clone(), current.revision).await {
            Ok(_) => return Ok(Some(item)),
            Err(StoreError::Conflict { .. }) => {
                debug!(%key, attempt, "conditional write lost, re-reading");
            }
            Err(err) => return Err(err),
        }
    }

    Err(StoreError::Conflict {
        key: key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revision_advances() {
        assert_eq!(Revision::INITIAL.next(), Revision::new(2));
        assert_eq!(Revision::new(7).get(), 7);
    }

    #[test]
    fn store_errors_surface_verbatim_as_upstream() {
        let err: LingoError = StoreError::Unavailable("connection reset by peer".into()).into();
        assert_eq!(
            err,
            LingoError::Upstream("connection reset by peer".to_string())
        );
    }
}
