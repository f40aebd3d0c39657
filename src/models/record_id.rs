use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Seed files use both `"id": "1"` and `"id": 1`. The on-disk form is kept
/// as is; lookups compare the canonical string form exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(Number),
}

impl RecordId {
    pub fn canonical(&self) -> String {
        match self {
            RecordId::Text(text) => text.clone(),
            RecordId::Number(number) => number.to_string(),
        }
    }

    pub fn matches(&self, raw: &str) -> bool {
        self.canonical() == raw
    }
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl From<String> for RecordId {
    fn from(text: String) -> Self {
        RecordId::Text(text)
    }
}
