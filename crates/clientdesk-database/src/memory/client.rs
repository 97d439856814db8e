//! In-memory client store.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use clientdesk_core::result::AppResult;
use clientdesk_entity::client::{Client, NewClient};

use crate::repositories::ClientStore;

/// Client store held in a concurrent map, keyed by id.
#[derive(Debug, Default)]
pub struct MemoryClientStore {
    clients: DashMap<i32, Client>,
    next_id: AtomicI32,
}

impl MemoryClientStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for MemoryClientStore {
    async fn create(&self, client: NewClient) -> AppResult<Client> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let client = Client {
            id,
            full_name: client.full_name,
            contacts: client.contacts,
        };
        self.clients.insert(id, client.clone());
        Ok(client)
    }

    async fn read(&self, id: i32) -> AppResult<Option<Client>> {
        Ok(self.clients.get(&id).map(|c| c.clone()))
    }

    async fn update(&self, client: &Client) -> AppResult<bool> {
        match self.clients.get_mut(&client.id) {
            Some(mut entry) => {
                *entry = client.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.clients.remove(&id).is_some())
    }

    async fn get_all(&self) -> AppResult<Vec<Client>> {
        let mut all: Vec<Client> = self.clients.iter().map(|c| c.clone()).collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_client(name: &str) -> NewClient {
        NewClient {
            full_name: name.to_string(),
            contacts: "555-0100".to_string(),
        }
    }

    #[tokio::test]
    async fn test_crud_roundtrip() {
        let store = MemoryClientStore::new();
        let created = store.create(new_client("Acme")).await.unwrap();

        let read = store.read(created.id).await.unwrap().unwrap();
        assert_eq!(read.full_name, "Acme");

        let updated = Client {
            full_name: "Acme Ltd".to_string(),
            ..read
        };
        assert!(store.update(&updated).await.unwrap());
        assert!(store.delete(created.id).await.unwrap());
        assert!(store.read(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_id_reports_false() {
        let store = MemoryClientStore::new();
        let ghost = Client {
            id: 42,
            full_name: "Nobody".to_string(),
            contacts: String::new(),
        };
        assert!(!store.update(&ghost).await.unwrap());
        assert!(!store.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_all_sorted_by_id() {
        let store = MemoryClientStore::new();
        store.create(new_client("A")).await.unwrap();
        store.create(new_client("B")).await.unwrap();
        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].id < all[1].id);
    }
}
