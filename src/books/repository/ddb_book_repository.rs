use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use crate::books::domain::model::{BookEntity, BookId};
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{parse_item, parse_number_attribute, parse_string_attribute};

// Book table layout: `author` is the partition key and `title` the sort key, so the
// composite identity is the table's primary key and `num_copies` is the only other attribute.
#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
}

impl DDBBookRepository {
    pub(crate) fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl Repository<BookId, BookEntity> for DDBBookRepository {
    async fn list_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut records = vec![];
        let mut exclusive_start_key = None;
        loop {
            let res = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await.map_err(LibraryError::from)?;
            for item in res.items().unwrap_or_default() {
                records.push(map_to_book(item)?);
            }
            exclusive_start_key = res.last_evaluated_key().cloned();
            if exclusive_start_key.is_none() {
                break;
            }
        }
        debug!(table_name, count = records.len(), "scanned books");
        Ok(records)
    }

    async fn find_by_identity(&self, key: &BookId) -> LibraryResult<Option<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client
            .get_item()
            .table_name(table_name)
            .consistent_read(true)
            .key("author", AttributeValue::S(key.author.to_string()))
            .key("title", AttributeValue::S(key.title.to_string()))
            .send()
            .await.map_err(LibraryError::from)?;
        match res.item() {
            Some(map) => map_to_book(map).map(Some),
            None => Ok(None),
        }
    }

    async fn save(&self, entity: &BookEntity) -> LibraryResult<()> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| ()).map_err(LibraryError::from)
    }

    async fn delete_by_identity(&self, key: &BookId) -> LibraryResult<()> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key("author", AttributeValue::S(key.author.to_string()))
            .key("title", AttributeValue::S(key.title.to_string()))
            .send()
            .await.map(|_| ()).map_err(LibraryError::from)
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> LibraryResult<BookEntity> {
    let author = parse_string_attribute("author", map)
        .ok_or_else(|| LibraryError::serialization("book item without author"))?;
    let title = parse_string_attribute("title", map)
        .ok_or_else(|| LibraryError::serialization("book item without title"))?;
    let num_copies = parse_number_attribute("num_copies", map)
        .ok_or_else(|| LibraryError::serialization("book item without num_copies"))?;
    Ok(BookEntity {
        author,
        title,
        num_copies,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use async_once::AsyncOnce;
    use aws_sdk_dynamodb::Client;
    use aws_sdk_dynamodb::types::AttributeValue;
    use lazy_static::lazy_static;

    use crate::books::domain::model::{BookEntity, BookId};
    use crate::books::repository::ddb_book_repository::{map_to_book, DDBBookRepository};
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::core::repository::{Repository, RepositoryStore};
    use crate::utils::ddb::{build_db_client, create_table, delete_table};

    lazy_static! {
        static ref CLIENT: AsyncOnce<Client> = AsyncOnce::new(async {
                let config = Configuration::new("test").with_store(RepositoryStore::LocalDynamoDB);
                let client = build_db_client(&config).await;
                let _ = delete_table(&client, "test_books").await;
                let _ = create_table(&client, "test_books", "author", "title").await;
                client
            });
    }

    #[tokio::test]
    async fn test_should_map_item_to_book() {
        let item = HashMap::from([
            ("author".to_string(), AttributeValue::S("Stephen King".to_string())),
            ("title".to_string(), AttributeValue::S("The Shining".to_string())),
            ("num_copies".to_string(), AttributeValue::N("52".to_string())),
        ]);
        let book = map_to_book(&item).expect("should map book");
        assert_eq!(BookEntity::new("Stephen King", "The Shining", 52), book);

        let item = HashMap::from([
            ("title".to_string(), AttributeValue::S("The Shining".to_string())),
        ]);
        assert!(matches!(map_to_book(&item), Err(LibraryError::Serialization { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_item_without_valid_copies() {
        let mut item = HashMap::from([
            ("author".to_string(), AttributeValue::S("a".to_string())),
            ("title".to_string(), AttributeValue::S("t".to_string())),
        ]);
        assert!(matches!(map_to_book(&item), Err(LibraryError::Serialization { .. })));

        item.insert("num_copies".to_string(), AttributeValue::N("12.5".to_string()));
        assert!(matches!(map_to_book(&item), Err(LibraryError::Serialization { .. })));

        item.insert("num_copies".to_string(), AttributeValue::S("12".to_string()));
        assert!(matches!(map_to_book(&item), Err(LibraryError::Serialization { .. })));
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on localhost:8000"]
    async fn test_should_save_get_books() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "test_books");
        let book = BookEntity::new("ddb author", "get title", 3);
        books_repo.save(&book).await.expect("should save book");

        let loaded = books_repo.find_by_identity(&book.id()).await.expect("should return book");
        assert_eq!(Some(book), loaded);

        let missing = books_repo.find_by_identity(&BookId::new("ddb author", "missing")).await.expect("should query book");
        assert_eq!(None, missing);
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on localhost:8000"]
    async fn test_should_overwrite_books() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "test_books");
        books_repo.save(&BookEntity::new("ddb author", "overwrite title", 1)).await.expect("should save book");
        books_repo.save(&BookEntity::new("ddb author", "overwrite title", 9)).await.expect("should save book");

        let loaded = books_repo.find_by_identity(&BookId::new("ddb author", "overwrite title")).await.expect("should return book");
        assert_eq!(Some(9), loaded.map(|b| b.num_copies));
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on localhost:8000"]
    async fn test_should_save_list_books() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "test_books");
        for i in 0..20 {
            let book = BookEntity::new("ddb list author", format!("title_{}", i).as_str(), i);
            books_repo.save(&book).await.expect("should save book");
        }
        let res = books_repo.list_all().await.expect("should list books");
        assert_eq!(20, res.iter().filter(|b| b.author == "ddb list author").count());
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on localhost:8000"]
    async fn test_should_save_delete_books() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "test_books");
        let book = BookEntity::new("ddb author", "delete title", 1);
        books_repo.save(&book).await.expect("should save book");

        books_repo.delete_by_identity(&book.id()).await.expect("should delete book");
        books_repo.delete_by_identity(&book.id()).await.expect("should ignore missing book");

        let loaded = books_repo.find_by_identity(&book.id()).await.expect("should query book");
        assert_eq!(None, loaded);
    }
}
