use crate::models::{Comment, RecordId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Product records come from externally maintained seed data. Only `id`,
/// `comments` and `rate` are interpreted; everything else is carried through
/// untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
    // `"rate": null` is a stored value, not an absent one
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub rate: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn matches(&self, id: &str) -> bool {
        self.id.matches(id)
    }

    pub fn comments(&self) -> &[Comment] {
        self.comments.as_deref().unwrap_or_default()
    }

    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.get_or_insert_with(Vec::new).push(comment);
    }
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Numeric conversion of a submitted rating.
///
/// Blank input is 0, integral input becomes a JSON integer, other finite
/// decimals a JSON float. Anything else has no JSON number form and is stored
/// as `null`.
pub fn parse_rate(raw: &str) -> Value {
    let raw = raw.trim();
    if raw.is_empty() {
        return Value::from(0);
    }
    if let Ok(int) = raw.parse::<i64>() {
        return Value::from(int);
    }

    match raw.parse::<f64>() {
        Ok(float) if float.is_finite() => {
            if float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
                Value::from(float as i64)
            } else {
                Number::from_f64(float).map(Value::Number).unwrap_or(Value::Null)
            }
        }
        _ => Value::Null,
    }
}
