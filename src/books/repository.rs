pub mod ddb_book_repository;
pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::{BookEntity, BookId};
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookId, BookEntity> {
    async fn find_by_author_and_title(&self, author: &str, title: &str) -> LibraryResult<Option<BookEntity>> {
        self.find_by_identity(&BookId::new(author, title)).await
    }

    async fn delete_by_author_and_title(&self, author: &str, title: &str) -> LibraryResult<()> {
        self.delete_by_identity(&BookId::new(author, title)).await
    }
}
