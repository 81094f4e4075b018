use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookView;
use crate::catalog::domain::CatalogService;
use crate::core::command::{book_not_found_message, Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) author: String,
    pub(crate) title: String,
}

impl GetBookCommandRequest {
    pub fn new(author: &str, title: &str) -> Self {
        Self {
            author: author.to_string(),
            title: title.to_string(),
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, BookView> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<BookView, CommandError> {
        self.catalog_service.get_book(&req.author, &req.title).await?
            .ok_or_else(|| CommandError::not_found(book_not_found_message(&req.author, &req.title).as_str()))
    }
}
