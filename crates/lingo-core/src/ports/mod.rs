//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部システム（キーバリューストア, 翻訳サービス）への
//! インターフェースを提供し、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - ストアが source of truth（プロセス内に可変状態を持たない）
//! - ハンドルはプロセス起動時に 1 度だけ作り、`Arc<dyn ...>` で共有する

pub mod item_store;
pub mod translator;
pub mod clock;
pub mod id_generator;

// 主要な trait を再エクスポート
pub use self::item_store::{ItemStore, MAX_CONDITIONAL_ATTEMPTS, Revision, StoreError, Versioned};
pub use self::translator::{TranslateError, Translator};
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
