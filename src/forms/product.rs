use crate::models;
use serde::Deserialize;
use serde_json::Value;

/// Absent fields stay absent: no `email`/`text` key is written for them.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AddComment {
    pub email: Option<String>,
    pub comment: Option<String>,
}

impl From<AddComment> for models::Comment {
    fn from(form: AddComment) -> Self {
        models::Comment::new(form.comment).with_email(form.email)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct EditRating {
    pub rating: Option<String>,
}

impl EditRating {
    /// A missing `rating` has no numeric value and is stored as `null`.
    pub fn rate(&self) -> Value {
        self.rating
            .as_deref()
            .map(models::parse_rate)
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_rating_is_null_and_blank_rating_is_zero() {
        assert_eq!(EditRating { rating: None }.rate(), Value::Null);
        assert_eq!(EditRating { rating: Some(String::new()) }.rate(), json!(0));
        assert_eq!(EditRating { rating: Some("4".into()) }.rate(), json!(4));
    }

    #[test]
    fn missing_comment_fields_are_not_written() {
        let comment = models::Comment::from(AddComment::default());
        let json = serde_json::to_value(&comment).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("text").is_none());

        let comment = models::Comment::from(AddComment {
            email: Some("a@b.com".into()),
            comment: Some("hi".into()),
        });
        assert_eq!(comment.email.as_deref(), Some("a@b.com"));
        assert_eq!(comment.text.as_deref(), Some("hi"));
    }
}
