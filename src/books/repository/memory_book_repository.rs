use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::books::domain::model::{BookEntity, BookId};
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// Process-local book store for tests and local development. Each call takes the lock once,
// so a single save or delete is atomic but nothing spans calls.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookRepository {
    books: Arc<RwLock<HashMap<BookId, BookEntity>>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> LibraryError {
    LibraryError::runtime("book store lock poisoned", None)
}

#[async_trait]
impl Repository<BookId, BookEntity> for MemoryBookRepository {
    async fn list_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read().map_err(poisoned)?;
        Ok(books.values().cloned().collect())
    }

    async fn find_by_identity(&self, key: &BookId) -> LibraryResult<Option<BookEntity>> {
        let books = self.books.read().map_err(poisoned)?;
        Ok(books.get(key).cloned())
    }

    async fn save(&self, entity: &BookEntity) -> LibraryResult<()> {
        let mut books = self.books.write().map_err(poisoned)?;
        books.insert(entity.id(), entity.clone());
        Ok(())
    }

    async fn delete_by_identity(&self, key: &BookId) -> LibraryResult<()> {
        let mut books = self.books.write().map_err(poisoned)?;
        books.remove(key);
        Ok(())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {}
