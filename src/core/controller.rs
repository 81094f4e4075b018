use std::sync::Arc;
use axum::http::StatusCode;
use tracing::error;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;

// AppState is built once at startup, every request shares the same catalog service and store
#[derive(Clone)]
pub struct AppState {
    pub(crate) catalog_service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> AppState {
        AppState {
            catalog_service,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Database { .. } => {
                error!(error = ?err, "catalog store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::DuplicateKey { message } => {
                (StatusCode::CONFLICT, message)
            }
            CommandError::NotFound { message } => {
                (StatusCode::NOT_FOUND, message)
            }
            CommandError::Runtime { .. } => {
                error!(error = ?err, "catalog runtime failure");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                error!(error = ?err, "unreadable catalog record");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_command_errors_to_status() {
        let (status, body) = ServerError::from(CommandError::not_found("missing"));
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!("missing", body);

        let (status, body) = ServerError::from(CommandError::DuplicateKey { message: "exists".to_string() });
        assert_eq!(StatusCode::CONFLICT, status);
        assert_eq!("exists", body);

        let (status, _) = ServerError::from(CommandError::Validation { message: "bad".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);

        let (status, _) = ServerError::from(CommandError::Serialization { message: "book item without num_copies".to_string() });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);

        let (status, _) = ServerError::from(CommandError::Runtime { message: "down".to_string(), reason_code: None, retryable: true });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    }
}
