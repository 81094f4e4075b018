use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookView;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[async_trait]
impl Command<(), Vec<BookView>> for ListBooksCommand {
    async fn execute(&self, _req: ()) -> Result<Vec<BookView>, CommandError> {
        self.catalog_service.list_books().await.map_err(CommandError::from)
    }
}
