use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Keyed storage contract shared by all stores. There is no conditional write here, callers
// that care about "already exists" or "not found" must look the key up first.
#[async_trait]
pub trait Repository<Key, Entity>: Sync + Send {
    // all stored entities in store iteration order
    async fn list_all(&self) -> LibraryResult<Vec<Entity>>;

    // returns None when nothing is stored under the key
    async fn find_by_identity(&self, key: &Key) -> LibraryResult<Option<Entity>>;

    // inserts the entity or replaces the one sharing its key
    async fn save(&self, entity: &Entity) -> LibraryResult<()>;

    // removes the entity if present, otherwise a no-op
    async fn delete_by_identity(&self, key: &Key) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    DynamoDB,
    LocalDynamoDB,
    Memory,
}

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "dynamodb" => RepositoryStore::DynamoDB,
            "memory" => RepositoryStore::Memory,
            _ => RepositoryStore::LocalDynamoDB,
        }
    }
}
