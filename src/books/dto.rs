use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

// BookView is what callers of the catalog see. It mirrors BookEntity field for field so the
// stored shape can change without touching the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookView {
    pub author: String,
    pub title: String,
    pub num_copies: i64,
}

impl BookView {
    pub fn new(author: &str, title: &str, num_copies: i64) -> BookView {
        BookView {
            author: author.to_string(),
            title: title.to_string(),
            num_copies,
        }
    }
}

impl From<&BookEntity> for BookView {
    fn from(other: &BookEntity) -> Self {
        Self {
            author: other.author.to_string(),
            title: other.title.to_string(),
            num_copies: other.num_copies,
        }
    }
}
