//! TranslationCache - Item ごとの翻訳結果キャッシュ
//!
//! # 不変条件
//! - キーは正規化済みの `LanguageCode`（1 言語につき 1 値）
//! - エントリは追加のみ。削除も上書きもしない（単調増加）

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::language::LanguageCode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TranslationCache(BTreeMap<LanguageCode, String>);

impl TranslationCache {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, language: &LanguageCode) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    pub fn contains(&self, language: &LanguageCode) -> bool {
        self.0.contains_key(language)
    }

    /// エントリを追加する。既に同じ言語がある場合は何もしない。
    ///
    /// 追加した場合は `true` を返す。
    pub fn insert_if_absent(&mut self, language: LanguageCode, text: impl Into<String>) -> bool {
        if self.0.contains_key(&language) {
            return false;
        }
        self.0.insert(language, text.into());
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 正規化後に同じ言語になるキーは、文書中で最初のものを残す
impl<'de> Deserialize<'de> for TranslationCache {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CacheVisitor;

        impl<'de> Visitor<'de> for CacheVisitor {
            type Value = TranslationCache;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of language code to translated text")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut cache = TranslationCache::new();
                while let Some((language, text)) = map.next_entry::<LanguageCode, String>()? {
                    cache.insert_if_absent(language, text);
                }
                Ok(cache)
            }
        }

        deserializer.deserialize_map(CacheVisitor)
    }
}
