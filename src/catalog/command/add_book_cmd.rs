use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::books::domain::model::validate_num_copies;
use crate::catalog::domain::CatalogService;
use crate::core::command::{book_exists_message, Command, CommandError};
use crate::core::library::LibraryError;

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) author: String,
    pub(crate) title: String,
    pub(crate) num_copies: i64,
}

impl AddBookCommandRequest {
    pub fn new(author: &str, title: &str, num_copies: i64) -> Self {
        Self {
            author: author.to_string(),
            title: title.to_string(),
            num_copies,
        }
    }
}

// The existence check lives here rather than in the service, so two concurrent adds for the
// same book can both pass it and the last write wins. The copy count is checked before it.
#[async_trait]
impl Command<AddBookCommandRequest, ()> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<(), CommandError> {
        validate_num_copies(req.num_copies)?;
        if self.catalog_service.get_book(&req.author, &req.title).await?.is_some() {
            info!(author = %req.author, title = %req.title, "rejecting duplicate book");
            return Err(LibraryError::duplicate_key(book_exists_message(&req.author, &req.title).as_str()).into());
        }
        self.catalog_service.create_book(&req.author, &req.title, req.num_copies).await.map_err(CommandError::from)
    }
}
