use crate::models::Comment;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SEEDED_COMMENT_TEXT: &str = "First comment";

/// Missing keys in hand-edited records default instead of failing the file;
/// unknown keys are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: i64, // creation time in milliseconds
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String, // stored as submitted
    pub comments: Vec<Comment>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }
}
