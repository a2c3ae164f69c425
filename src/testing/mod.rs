use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::database::manager::DatabaseError;
use crate::database::models::item::Item;
use crate::database::models::user::User;
use crate::database::store::ItemStore;

/// In-memory `ItemStore` for manager tests. Counts store accesses so tests
/// can assert that validation failures short-circuit before any lookup.
pub struct MemoryItemStore {
    items: Mutex<Vec<Item>>,
    lookups: AtomicUsize,
}

impl MemoryItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemStore for &MemoryItemStore {
    async fn find_one_by_id(&self, id: i64) -> Result<Option<Item>, DatabaseError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let items = self.items.lock().unwrap();
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn find_by_owner(&self, user_id: i64) -> Result<Vec<Item>, DatabaseError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|item| item.user_id == user_id)
            .cloned()
            .collect())
    }
}

pub fn user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        password: crate::auth::hash_password("test"),
        created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn item(id: i64, user_id: i64, data: &str) -> Item {
    Item {
        id,
        user_id,
        data: data.to_string(),
        created_at: Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
        updated_at: Some(Utc.with_ymd_and_hms(2020, 2, 2, 0, 0, 0).unwrap()),
    }
}
