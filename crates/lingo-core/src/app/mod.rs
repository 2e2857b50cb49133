//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせて 5 つのオペレーションを実装します。
//!
//! # 主要コンポーネント
//! - **AppBuilder**: ハンドル（ItemStore, Translator, IdGenerator）のワイヤリング
//! - **items**: CreateItem / GetAll / GetByPartition / UpdateItem
//! - **translation**: GetTranslation（翻訳キャッシュの read-through）
//! - **requests / responses**: 境界で検証される型付きリクエストと構造化レスポンス

pub mod builder;
pub mod requests;
pub mod responses;
pub mod items;
pub mod translation;

// 主要な型を再エクスポート
pub use self::builder::{App, AppBuilder, BuildError};
pub use self::requests::{
    CreateItemRequest, PartitionQuery, TranslationRequest, UpdateItemBody, UpdateItemRequest,
};
pub use self::responses::{ErrorBody, TranslationResponse, UpdateItemResponse};
pub use self::translation::TranslationOutcome;
