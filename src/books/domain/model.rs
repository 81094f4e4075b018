use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// BookId is the composite identity of a catalog entry. It never changes for the lifetime of
// a record, a rename is a delete followed by a create.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId {
    pub author: String,
    pub title: String,
}

impl BookId {
    pub fn new(author: &str, title: &str) -> Self {
        Self {
            author: author.to_string(),
            title: title.to_string(),
        }
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.author, self.title)
    }
}

// BookEntity is the persisted record: one row per (author, title) with the number of
// copies currently available in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub author: String,
    pub title: String,
    pub num_copies: i64,
}

impl BookEntity {
    pub fn new(author: &str, title: &str, num_copies: i64) -> Self {
        Self {
            author: author.to_string(),
            title: title.to_string(),
            num_copies,
        }
    }

    pub fn id(&self) -> BookId {
        BookId::new(self.author.as_str(), self.title.as_str())
    }

    pub fn validate(&self) -> LibraryResult<()> {
        if self.author.trim().is_empty() {
            return Err(LibraryError::validation("author must not be empty", Some("author".to_string())));
        }
        if self.title.trim().is_empty() {
            return Err(LibraryError::validation("title must not be empty", Some("title".to_string())));
        }
        validate_num_copies(self.num_copies)
    }
}

pub(crate) fn validate_num_copies(num_copies: i64) -> LibraryResult<()> {
    if num_copies < 0 {
        return Err(LibraryError::validation(
            format!("numCopies must not be negative, got {}", num_copies).as_str(),
            Some("numCopies".to_string())));
    }
    Ok(())
}
