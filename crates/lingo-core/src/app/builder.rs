//! AppBuilder - アプリケーションの構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//! - ハンドルはプロセス起動時に 1 度だけ作り、リクエスト間で共有する

use std::sync::Arc;

use crate::ports::{IdGenerator, ItemStore, SystemClock, Translator, UlidGenerator};

/// AppBuilder はアプリケーションを構築
///
/// # 使用例
/// ```ignore
/// let app = AppBuilder::new()
///     .store(Arc::new(InMemoryItemStore::new()))
///     .translator(Arc::new(HttpTranslator::new(base_url)?))
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - store と translator は必須
/// - id_generator は省略時 `UlidGenerator<SystemClock>`
/// - 不足があれば build() が BuildError を返す
#[derive(Default)]
pub struct AppBuilder {
    store: Option<Arc<dyn ItemStore>>,
    translator: Option<Arc<dyn Translator>>,
    id_generator: Option<Arc<dyn IdGenerator>>,
}

/// BuildError はアプリケーション構築時のエラー
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("Missing ports: {0:?}. These ports must be provided before build().")]
    MissingPorts(Vec<&'static str>),
}

impl AppBuilder {
    /// 新しい AppBuilder を作成
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: Arc<dyn ItemStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(id_generator);
        self
    }

    /// AppBuilder を構築して App を生成
    ///
    /// # 検証
    /// - 必須の port が全て設定されているかチェック
    /// - 不足があれば BuildError::MissingPorts を返す
    pub fn build(self) -> Result<App, BuildError> {
        let mut missing = Vec::new();
        if self.store.is_none() {
            missing.push("store");
        }
        if self.translator.is_none() {
            missing.push("translator");
        }

        match (self.store, self.translator) {
            (Some(store), Some(translator)) => Ok(App {
                store,
                translator,
                id_generator: self
                    .id_generator
                    .unwrap_or_else(|| Arc::new(UlidGenerator::new(SystemClock))),
            }),
            _ => Err(BuildError::MissingPorts(missing)),
        }
    }
}

/// App は 5 つのオペレーションの入口
///
/// clone は安価です（ハンドルは全て `Arc`）。
#[derive(Clone)]
pub struct App {
    pub(crate) store: Arc<dyn ItemStore>,
    pub(crate) translator: Arc<dyn Translator>,
    pub(crate) id_generator: Arc<dyn IdGenerator>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{DictionaryTranslator, InMemoryItemStore};

    #[test]
    fn test_build_success() {
        let app = AppBuilder::new()
            .store(Arc::new(InMemoryItemStore::new()))
            .translator(Arc::new(DictionaryTranslator::new()))
            .build();
        assert!(app.is_ok());
    }

    #[test]
    fn test_build_missing_translator() {
        let app = AppBuilder::new()
            .store(Arc::new(InMemoryItemStore::new()))
            .build();
        assert!(matches!(
            app,
            Err(BuildError::MissingPorts(missing)) if missing == vec!["translator"]
        ));
    }

    #[test]
    fn test_build_nothing_set() {
        let err = AppBuilder::new().build().err().unwrap();
        assert_eq!(err, BuildError::MissingPorts(vec!["store", "translator"]));
    }
}
