use std::sync::Arc;
use async_trait::async_trait;
use crate::catalog::domain::CatalogService;
use crate::core::command::{book_not_found_message, Command, CommandError};

pub(crate) struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) author: String,
    pub(crate) title: String,
}

impl RemoveBookCommandRequest {
    pub fn new(author: &str, title: &str) -> Self {
        Self {
            author: author.to_string(),
            title: title.to_string(),
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, ()> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<(), CommandError> {
        if self.catalog_service.delete_book(&req.author, &req.title).await? {
            Ok(())
        } else {
            Err(CommandError::not_found(book_not_found_message(&req.author, &req.title).as_str()))
        }
    }
}
