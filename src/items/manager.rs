use crate::database::models::item::Item;
use crate::database::models::user::User;
use crate::database::store::ItemStore;
use crate::database::unit_of_work::{NewItem, UnitOfWork};
use crate::items::error::ItemError;
use crate::items::normalizer::{self, ItemRecord};
use crate::items::request::ItemRequest;
use crate::items::validator;

pub const ERROR_NO_ITEM: &str = "No item";

/// Orchestrates validation, lookup, ownership authorization and staging for
/// item mutations. The only component with business rules.
///
/// Mutations are staged on the given `UnitOfWork`; the calling layer decides
/// when to commit (once per request).
pub struct ItemManager<S> {
    store: S,
}

impl<S: ItemStore> ItemManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stage a new item owned by the caller. The store assigns the id and
    /// both timestamps at commit; the caller supplies neither.
    pub async fn create(
        &self,
        user: &User,
        request: &ItemRequest,
        uow: &mut UnitOfWork,
    ) -> Result<(), ItemError> {
        let data = validator::validate_on_create(request)?;

        uow.stage_insert(NewItem {
            user_id: user.id,
            data: data.to_owned(),
        });

        Ok(())
    }

    /// All of the caller's items in store order, mapped to their wire form.
    pub async fn list(&self, user: &User) -> Result<Vec<ItemRecord>, ItemError> {
        let items = self.store.find_by_owner(user.id).await?;

        Ok(items.iter().map(normalizer::item_to_record).collect())
    }

    /// Stage removal of one of the caller's items.
    pub async fn delete(
        &self,
        user: &User,
        request: &ItemRequest,
        uow: &mut UnitOfWork,
    ) -> Result<(), ItemError> {
        let id = validator::validate_on_delete(request)?;
        let item = self.owned_item(user, id).await?;

        uow.stage_remove(item.id);

        Ok(())
    }

    /// Stage a data rewrite on one of the caller's items. Only `data` (and,
    /// at commit, `updated_at`) change; id and owner are immutable.
    pub async fn update(
        &self,
        user: &User,
        request: &ItemRequest,
        uow: &mut UnitOfWork,
    ) -> Result<(), ItemError> {
        let (id, data) = validator::validate_on_update(request)?;
        let item = self.owned_item(user, id).await?;

        uow.stage_update(item.id, data.to_owned());

        Ok(())
    }

    /// Look up an item and authorize the caller as its owner. A missing item
    /// and someone else's item report the identical "No item" so callers
    /// cannot probe for the existence of other users' items.
    async fn owned_item(&self, user: &User, id: i64) -> Result<Item, ItemError> {
        let item = self
            .store
            .find_one_by_id(id)
            .await?
            .ok_or_else(|| ItemError::Api(ERROR_NO_ITEM.to_string()))?;

        if item.user_id != user.id {
            return Err(ItemError::Api(ERROR_NO_ITEM.to_string()));
        }

        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::unit_of_work::StagedChange;
    use crate::testing::{item, user, MemoryItemStore};

    fn request(id: Option<i64>, data: Option<&str>) -> ItemRequest {
        ItemRequest {
            id,
            data: data.map(str::to_string),
        }
    }

    fn assert_no_item(err: ItemError) {
        match err {
            ItemError::Api(msg) => assert_eq!(msg, ERROR_NO_ITEM),
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_stages_insert_owned_by_caller() {
        let store = MemoryItemStore::new(vec![]);
        let manager = ItemManager::new(&store);
        let mut uow = UnitOfWork::new();

        manager
            .create(&user(1, "john"), &request(None, Some("data")), &mut uow)
            .await
            .unwrap();

        assert_eq!(
            uow.staged(),
            [StagedChange::Insert(NewItem {
                user_id: 1,
                data: "data".to_string(),
            })]
        );
        // No read is needed to create.
        assert_eq!(store.lookups(), 0);
    }

    #[tokio::test]
    async fn create_without_data_fails_and_stages_nothing() {
        let store = MemoryItemStore::new(vec![]);
        let manager = ItemManager::new(&store);
        let mut uow = UnitOfWork::new();

        let err = manager
            .create(&user(1, "john"), &request(None, None), &mut uow)
            .await
            .unwrap_err();

        assert!(matches!(err, ItemError::Validation(_)));
        assert!(uow.is_empty());
    }

    #[tokio::test]
    async fn list_maps_items_in_store_order() {
        let store = MemoryItemStore::new(vec![
            item(1, 7, "data"),
            item(2, 7, "more data"),
            item(3, 8, "someone else's"),
        ]);
        let manager = ItemManager::new(&store);

        let records = manager.list(&user(7, "john")).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].data, "data");
        assert_eq!(records[1].data, "more data");
    }

    #[tokio::test]
    async fn list_without_items_is_empty() {
        let store = MemoryItemStore::new(vec![item(1, 8, "not yours")]);
        let manager = ItemManager::new(&store);

        assert!(manager.list(&user(7, "john")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_is_idempotent_without_mutations() {
        let store = MemoryItemStore::new(vec![item(1, 7, "data"), item(2, 7, "more data")]);
        let manager = ItemManager::new(&store);
        let caller = user(7, "john");

        let first = manager.list(&caller).await.unwrap();
        let second = manager.list(&caller).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn delete_stages_remove_for_owned_item() {
        let store = MemoryItemStore::new(vec![item(42, 7, "data")]);
        let manager = ItemManager::new(&store);
        let mut uow = UnitOfWork::new();

        manager
            .delete(&user(7, "john"), &request(Some(42), None), &mut uow)
            .await
            .unwrap();

        assert_eq!(uow.staged(), [StagedChange::Remove { id: 42 }]);
    }

    #[tokio::test]
    async fn delete_unknown_item_reports_no_item() {
        let store = MemoryItemStore::new(vec![]);
        let manager = ItemManager::new(&store);
        let mut uow = UnitOfWork::new();

        let err = manager
            .delete(&user(7, "john"), &request(Some(777), None), &mut uow)
            .await
            .unwrap_err();

        assert_no_item(err);
        assert!(uow.is_empty());
    }

    #[tokio::test]
    async fn delete_foreign_item_is_indistinguishable_from_missing() {
        let store = MemoryItemStore::new(vec![item(42, 8, "thom's")]);
        let manager = ItemManager::new(&store);
        let mut uow = UnitOfWork::new();

        let foreign = manager
            .delete(&user(7, "john"), &request(Some(42), None), &mut uow)
            .await
            .unwrap_err();
        let missing = manager
            .delete(&user(7, "john"), &request(Some(999), None), &mut uow)
            .await
            .unwrap_err();

        // Same kind, same message: callers cannot tell "not found" from
        // "not yours".
        assert_eq!(foreign.to_string(), missing.to_string());
        assert_no_item(foreign);
        assert_no_item(missing);
        assert!(uow.is_empty());
    }

    #[tokio::test]
    async fn delete_without_id_fails_before_any_lookup() {
        let store = MemoryItemStore::new(vec![item(42, 7, "data")]);
        let manager = ItemManager::new(&store);
        let mut uow = UnitOfWork::new();

        let err = manager
            .delete(&user(7, "john"), &request(None, Some("data")), &mut uow)
            .await
            .unwrap_err();

        assert!(matches!(err, ItemError::Validation(_)));
        assert_eq!(store.lookups(), 0);
        assert!(uow.is_empty());
    }

    #[tokio::test]
    async fn update_stages_new_data_against_same_id() {
        let store = MemoryItemStore::new(vec![item(42, 7, "hello")]);
        let manager = ItemManager::new(&store);
        let mut uow = UnitOfWork::new();

        manager
            .update(&user(7, "john"), &request(Some(42), Some("world")), &mut uow)
            .await
            .unwrap();

        assert_eq!(
            uow.staged(),
            [StagedChange::Update {
                id: 42,
                data: "world".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn update_foreign_item_reports_no_item() {
        let store = MemoryItemStore::new(vec![item(42, 8, "thom's")]);
        let manager = ItemManager::new(&store);
        let mut uow = UnitOfWork::new();

        let err = manager
            .update(&user(7, "john"), &request(Some(42), Some("world")), &mut uow)
            .await
            .unwrap_err();

        assert_no_item(err);
        assert!(uow.is_empty());
    }

    #[tokio::test]
    async fn update_requires_both_fields() {
        let store = MemoryItemStore::new(vec![item(42, 7, "hello")]);
        let manager = ItemManager::new(&store);
        let mut uow = UnitOfWork::new();
        let caller = user(7, "john");

        let missing_id = manager
            .update(&caller, &request(None, Some("world")), &mut uow)
            .await
            .unwrap_err();
        let missing_data = manager
            .update(&caller, &request(Some(42), None), &mut uow)
            .await
            .unwrap_err();

        assert!(matches!(missing_id, ItemError::Validation(_)));
        assert!(matches!(missing_data, ItemError::Validation(_)));
        assert_eq!(store.lookups(), 0);
    }
}
