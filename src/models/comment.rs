use crate::models::RecordId;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A comment attached either to a user (seeded on registration) or to a product.
///
/// Comments in seed data may carry extra keys (e.g. a per-comment `rating`);
/// those are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: RecordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>, // product comments only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Comment {
    pub fn new(text: Option<String>) -> Self {
        Self {
            id: random_hex_id().into(),
            email: None,
            text,
            date: Utc::now(),
            extra: Map::new(),
        }
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }
}

/// Random lowercase hex token. Collisions are possible and not checked.
pub fn random_hex_id() -> String {
    format!("{:x}", rand::thread_rng().gen::<u64>())
}
