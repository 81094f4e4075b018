pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookView;
use crate::core::library::LibraryResult;

// CatalogService owns the existence rules for update and delete. Expected outcomes come back
// as Option/bool, only store failures are errors. Create does not check for an existing book,
// callers that need "already exists" must ask get_book first.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookView>>;
    async fn get_book(&self, author: &str, title: &str) -> LibraryResult<Option<BookView>>;
    async fn create_book(&self, author: &str, title: &str, num_copies: i64) -> LibraryResult<()>;
    async fn update_book(&self, author: &str, title: &str, num_copies: i64) -> LibraryResult<bool>;
    async fn delete_book(&self, author: &str, title: &str) -> LibraryResult<bool>;
}
