use async_trait::async_trait;
use tracing::debug;
use crate::books::domain::model::{validate_num_copies, BookEntity};
use crate::books::dto::BookView;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryResult;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookView>> {
        let res = self.book_repository.list_all().await?;
        Ok(res.iter().map(BookView::from).collect())
    }

    async fn get_book(&self, author: &str, title: &str) -> LibraryResult<Option<BookView>> {
        self.book_repository.find_by_author_and_title(author, title).await
            .map(|b| b.as_ref().map(BookView::from))
    }

    async fn create_book(&self, author: &str, title: &str, num_copies: i64) -> LibraryResult<()> {
        let book = BookEntity::new(author, title, num_copies);
        book.validate()?;
        debug!(%author, %title, num_copies, "saving new book");
        self.book_repository.save(&book).await
    }

    async fn update_book(&self, author: &str, title: &str, num_copies: i64) -> LibraryResult<bool> {
        validate_num_copies(num_copies)?;
        match self.book_repository.find_by_author_and_title(author, title).await? {
            Some(mut book) => {
                book.num_copies = num_copies;
                debug!(%author, %title, num_copies, "updating book copies");
                self.book_repository.save(&book).await.map(|_| true)
            }
            None => Ok(false),
        }
    }

    async fn delete_book(&self, author: &str, title: &str) -> LibraryResult<bool> {
        match self.book_repository.find_by_author_and_title(author, title).await? {
            Some(_) => {
                debug!(%author, %title, "deleting book");
                self.book_repository.delete_by_author_and_title(author, title).await.map(|_| true)
            }
            None => Ok(false),
        }
    }
}
