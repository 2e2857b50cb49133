//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryItemStore**: プロセス内の ItemStore（開発用・テスト用）
//! - **HttpTranslator**: LibreTranslate 互換 HTTP API を呼ぶ Translator（本番用）
//! - **DictionaryTranslator**: 固定テーブルの Translator（開発用・テスト用）

pub mod inmem_store;
pub mod http_translator;
pub mod dictionary_translator;

// 主要な型を再エクスポート
pub use self::inmem_store::InMemoryItemStore;
pub use self::http_translator::HttpTranslator;
pub use self::dictionary_translator::DictionaryTranslator;
