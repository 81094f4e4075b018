use std::env;
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

pub const DEFAULT_TABLE_NAME: &str = "library_books";
pub const DEFAULT_DDB_ENDPOINT: &str = "http://localhost:8000";

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub store: RepositoryStore,
    pub table_name: String,
    pub ddb_endpoint: String,
    pub log_level: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            store: RepositoryStore::Memory,
            table_name: DEFAULT_TABLE_NAME.to_string(),
            ddb_endpoint: DEFAULT_DDB_ENDPOINT.to_string(),
            log_level: "info".to_string(),
        }
    }

    pub fn with_store(mut self, store: RepositoryStore) -> Self {
        self.store = store;
        self
    }

    // reads LIBRARY_* variables, falling back to local development defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let branch_id = lookup("LIBRARY_BRANCH").unwrap_or_else(|| "dev".to_string());
        Configuration {
            store: lookup("LIBRARY_STORE")
                .map(RepositoryStore::from)
                .unwrap_or(RepositoryStore::LocalDynamoDB),
            table_name: lookup("LIBRARY_TABLE").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            ddb_endpoint: lookup("LIBRARY_DDB_ENDPOINT").unwrap_or_else(|| DEFAULT_DDB_ENDPOINT.to_string()),
            log_level: lookup("LIBRARY_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            branch_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::domain::{Configuration, DEFAULT_DDB_ENDPOINT, DEFAULT_TABLE_NAME};
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id);
        assert_eq!(RepositoryStore::Memory, config.store);
        assert_eq!(DEFAULT_TABLE_NAME, config.table_name);
        assert_eq!("info", config.log_level);
    }

    #[tokio::test]
    async fn test_should_build_default_config_from_empty_env() {
        let config = Configuration::from_lookup(|_| None);
        assert_eq!("dev", config.branch_id);
        assert_eq!(RepositoryStore::LocalDynamoDB, config.store);
        assert_eq!(DEFAULT_TABLE_NAME, config.table_name);
        assert_eq!(DEFAULT_DDB_ENDPOINT, config.ddb_endpoint);
    }

    #[tokio::test]
    async fn test_should_build_config_from_env() {
        let vars = HashMap::from([
            ("LIBRARY_BRANCH", "prod"),
            ("LIBRARY_STORE", "dynamodb"),
            ("LIBRARY_TABLE", "books"),
            ("LIBRARY_LOG_LEVEL", "debug"),
        ]);
        let config = Configuration::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!("prod", config.branch_id);
        assert_eq!(RepositoryStore::DynamoDB, config.store);
        assert_eq!("books", config.table_name);
        assert_eq!("debug", config.log_level);
    }
}
