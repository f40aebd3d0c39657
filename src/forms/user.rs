use crate::models;
use chrono::Utc;
use serde::Deserialize;

/// Registration form as posted by the signup page.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Register {
    pub contact_name: String,
    pub contact_last_name: String,
    pub contact_email: String,
    pub contact_password: String,
}

impl Register {
    pub fn into_user(self) -> models::User {
        let seeded = models::Comment::new(Some(models::SEEDED_COMMENT_TEXT.to_string()));
        models::User {
            id: Utc::now().timestamp_millis(),
            name: self.contact_name,
            last_name: self.contact_last_name,
            email: self.contact_email,
            password: self.contact_password,
            comments: vec![seeded],
            extra: Default::default(),
        }
    }
}
