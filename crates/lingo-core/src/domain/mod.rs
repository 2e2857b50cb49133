//! Domain model (items, keys, language codes, errors).
//!
//! ドメイン層は永続化や HTTP を知りません。
//! ここで定義する型は ports / app のどちらからも使われます。

pub mod item;
pub mod language;
pub mod cache;
pub mod errors;

pub use self::item::{DEFAULT_DESCRIPTION, DEFAULT_SORT_ID, Item, ItemKey};
pub use self::language::{DEFAULT_TARGET_LANGUAGE, LanguageCode, LanguageCodeError};
pub use self::cache::TranslationCache;
pub use self::errors::LingoError;
