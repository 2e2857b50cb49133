//! lingo-core
//!
//! Core building blocks for the lingo item store and its translation cache.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（Item, ItemKey, LanguageCode, TranslationCache, errors）
//! - **ports**: 抽象化レイヤー（ItemStore, Translator, IdGenerator, Clock）
//! - **impls**: ports の実装（InMemoryItemStore, HttpTranslator, DictionaryTranslator）
//! - **app**: アプリケーションロジック（AppBuilder, 5 つのオペレーション, 翻訳キャッシュの状態遷移）

pub mod domain;
pub mod ports;
pub mod impls;
pub mod app;
