//! lingo-server
//!
//! HTTP adapter for lingo-core.
//!
//! # モジュール構成
//! - **config**: TOML ファイル + `LINGO__` 環境変数からの設定読み込み
//! - **server**: 設定から ItemStore / Translator を 1 度だけ組み立てる
//! - **http**: axum ルーターとハンドラ
//! - **error**: サーバー起動時のエラー

pub mod config;
pub mod error;
pub mod http;
pub mod server;

pub use crate::config::ServerConfig;
pub use crate::error::{Result, ServerError};
pub use crate::server::build_app;
