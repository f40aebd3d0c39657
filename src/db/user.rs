use crate::db::{StoreError, UserStore};
use crate::models;

#[derive(Debug, PartialEq)]
pub enum Registration {
    Created(models::User),
    DuplicateEmail,
}

pub async fn fetch_all(store: &UserStore) -> Vec<models::User> {
    store.read().await
}

/// Appends `user` unless a record with the same email already exists.
///
/// The duplicate scan and the append run under the store lock, so two
/// concurrent registrations with one email cannot both be admitted.
pub async fn register(store: &UserStore, user: models::User) -> Result<Registration, StoreError> {
    let _guard = store.lock().await;

    let existing = store.read().await;
    if existing.iter().any(|u| u.has_email(&user.email)) {
        tracing::info!("User with email {} already exists", user.email);
        return Ok(Registration::DuplicateEmail);
    }

    let mut users = store.read().await;
    users.push(user.clone());
    store.write(&users).await?;
    tracing::info!("New user {} has been saved", user.id);

    Ok(Registration::Created(user))
}
