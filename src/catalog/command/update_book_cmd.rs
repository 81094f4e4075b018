use std::sync::Arc;
use async_trait::async_trait;
use crate::catalog::domain::CatalogService;
use crate::core::command::{book_not_found_message, Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UpdateBookCommandRequest {
    pub author: String,
    pub title: String,
    pub num_copies: i64,
}

impl UpdateBookCommandRequest {
    pub fn new(author: &str, title: &str, num_copies: i64) -> Self {
        Self {
            author: author.to_string(),
            title: title.to_string(),
            num_copies,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, ()> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<(), CommandError> {
        if self.catalog_service.update_book(&req.author, &req.title, req.num_copies).await? {
            Ok(())
        } else {
            Err(CommandError::not_found(book_not_found_message(&req.author, &req.title).as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_update_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test")).await;
        svc.create_book("author", "title", 1).await.expect("should create book");

        UpdateBookCommand::new(svc.clone()).execute(UpdateBookCommandRequest::new("author", "title", 8))
            .await.expect("should update book");
        let loaded = svc.get_book("author", "title").await.expect("should query book");
        assert_eq!(Some(8), loaded.map(|b| b.num_copies));
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test")).await;
        let res = UpdateBookCommand::new(svc.clone()).execute(UpdateBookCommandRequest::new("author", "title", 8)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
        assert!(svc.list_books().await.expect("should list books").is_empty());
    }
}
