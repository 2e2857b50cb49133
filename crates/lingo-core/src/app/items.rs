//! CreateItem / GetAll / GetByPartition / UpdateItem

use tracing::{info, instrument, warn};

use super::builder::App;
use super::requests::{CreateItemRequest, PartitionQuery, UpdateItemRequest};
use super::responses::UpdateItemResponse;
use crate::domain::{Item, LingoError};

impl App {
    /// Create (or silently replace) an item.
    #[instrument(skip(self, request))]
    pub async fn create_item(&self, request: CreateItemRequest) -> Result<Item, LingoError> {
        let (key, description) = request.resolve(self.id_generator.as_ref())?;
        let item = Item::new(key, description);

        if let Some(previous) = self.store.put(item.clone()).await? {
            warn!(key = %previous.key(), "create_item replaced an existing item");
        }
        info!(key = %item.key(), "item created");
        Ok(item)
    }

    /// Every item, unordered, unpaginated.
    pub async fn get_all(&self) -> Result<Vec<Item>, LingoError> {
        Ok(self.store.scan_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_by_partition(&self, query: PartitionQuery) -> Result<Vec<Item>, LingoError> {
        let (partition_id, filter) = query.validate()?;
        Ok(self.store.query(&partition_id, filter.as_deref()).await?)
    }

    /// Replace the description of an existing item. The translation cache is kept.
    #[instrument(
        skip(self, request),
        fields(partition_id = %request.partition_id, sort_id = %request.sort_id)
    )]
    pub async fn update_item(
        &self,
        request: UpdateItemRequest,
    ) -> Result<UpdateItemResponse, LingoError> {
        let (key, description) = request.validate()?;
        let updated = self
            .store
            .update_description(&key, &description)
            .await?
            .ok_or_else(LingoError::item_not_found)?;

        info!(key = %key, "item updated");
        Ok(UpdateItemResponse::new(updated))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use rstest::rstest;

    use super::*;
    use crate::app::{AppBuilder, UpdateItemBody};
    use crate::domain::{ItemKey, LanguageCode, TranslationCache};
    use crate::impls::{DictionaryTranslator, InMemoryItemStore};
    use crate::ports::ItemStore;

    fn app_with(store: InMemoryItemStore) -> App {
        AppBuilder::new()
            .store(Arc::new(store))
            .translator(Arc::new(DictionaryTranslator::new()))
            .build()
            .unwrap()
    }

    fn create(partition_id: &str, sort_id: &str, description: &str) -> CreateItemRequest {
        CreateItemRequest {
            partition_id: Some(partition_id.to_string()),
            sort_id: Some(sort_id.to_string()),
            description: Some(description.to_string()),
        }
    }

    #[tokio::test]
    async fn create_with_description_only_uses_defaults() {
        let app = app_with(InMemoryItemStore::new());

        let item = app
            .create_item(CreateItemRequest {
                description: Some("Hello".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(!item.partition_id().is_empty());
        assert_eq!(item.sort_id(), "defaultSK");
        assert_eq!(item.description(), "Hello");
        assert!(item.translation_cache().is_empty());
    }

    #[tokio::test]
    async fn generated_partition_ids_are_distinct() {
        let app = app_with(InMemoryItemStore::new());

        let mut ids = HashSet::new();
        for _ in 0..50 {
            let item = app.create_item(CreateItemRequest::default()).await.unwrap();
            assert!(!item.partition_id().is_empty());
            ids.insert(item.partition_id().to_string());
        }

        assert_eq!(ids.len(), 50);
        assert_eq!(app.get_all().await.unwrap().len(), 50);
    }

    #[tokio::test]
    async fn create_overwrites_identical_key() {
        let store = InMemoryItemStore::new();
        let app = app_with(store.clone());

        app.create_item(create("P", "S", "first")).await.unwrap();
        app.create_item(create("P", "S", "second")).await.unwrap();

        assert_eq!(store.len().await, 1);
        let item = store
            .get(&ItemKey::new("P", "S").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(item.description(), "second");
    }

    #[rstest]
    #[case(None, 3)]
    #[case(Some(""), 3)]
    #[case(Some("apple"), 2)]
    #[case(Some("kiwi"), 0)]
    #[tokio::test]
    async fn get_by_partition_scopes_and_filters(
        #[case] filter: Option<&str>,
        #[case] expected: usize,
    ) {
        let app = app_with(InMemoryItemStore::new());
        for (p, s, d) in [
            ("fruit", "1", "red apple"),
            ("fruit", "2", "green apple"),
            ("fruit", "3", "banana"),
            ("veg", "1", "apple gourd"),
        ] {
            app.create_item(create(p, s, d)).await.unwrap();
        }

        let items = app
            .get_by_partition(PartitionQuery::new("fruit", filter.map(str::to_string)))
            .await
            .unwrap();

        assert_eq!(items.len(), expected);
        assert!(items.iter().all(|item| item.partition_id() == "fruit"));
        if let Some(f) = filter {
            assert!(items.iter().all(|item| item.description().contains(f)));
        }
    }

    #[tokio::test]
    async fn get_by_partition_requires_partition_id() {
        let app = app_with(InMemoryItemStore::new());
        let err = app
            .get_by_partition(PartitionQuery::new("", None))
            .await
            .unwrap_err();
        assert!(matches!(err, LingoError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn update_changes_only_description() {
        let store = InMemoryItemStore::new();
        let mut cache = TranslationCache::new();
        cache.insert_if_absent(LanguageCode::parse("fr").unwrap(), "Bonjour");
        let item =
            Item::new(ItemKey::new("P", "S").unwrap(), "Hello").with_translation_cache(cache.clone());
        store.put(item).await.unwrap();
        let app = app_with(store);

        let response = app
            .update_item(UpdateItemRequest::new(
                "P",
                "S",
                UpdateItemBody {
                    description: Some("Goodbye".to_string()),
                },
            ))
            .await
            .unwrap();

        assert_eq!(response.message, "Item updated successfully");
        let updated = response.updated_item;
        assert_eq!(updated.partition_id(), "P");
        assert_eq!(updated.sort_id(), "S");
        assert_eq!(updated.description(), "Goodbye");
        // Stale entries are kept on purpose.
        assert_eq!(updated.translation_cache(), &cache);
    }

    #[tokio::test]
    async fn update_missing_item_is_not_found_and_creates_nothing() {
        let store = InMemoryItemStore::new();
        let app = app_with(store.clone());

        let err = app
            .update_item(UpdateItemRequest::new(
                "P",
                "S",
                UpdateItemBody {
                    description: Some("Goodbye".to_string()),
                },
            ))
            .await
            .unwrap_err();

        assert_eq!(err, LingoError::NotFound("Item not found".to_string()));
        assert!(store.is_empty().await);
    }
}
