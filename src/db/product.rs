use crate::db::{ProductStore, StoreError};
use crate::models;
use serde_json::Value;

pub async fn fetch_all(store: &ProductStore) -> Vec<models::Product> {
    store.read().await
}

pub async fn fetch_comments(store: &ProductStore, id: &str) -> Option<Vec<models::Comment>> {
    store
        .read()
        .await
        .into_iter()
        .find(|product| product.matches(id))
        .map(|product| product.comments.unwrap_or_default())
}

/// Returns `Ok(None)` when no product matches `id`; the file is left untouched.
pub async fn add_comment(
    store: &ProductStore,
    id: &str,
    comment: models::Comment,
) -> Result<Option<models::Comment>, StoreError> {
    let _guard = store.lock().await;

    let mut products = store.read().await;
    let Some(product) = products.iter_mut().find(|product| product.matches(id)) else {
        return Ok(None);
    };
    product.push_comment(comment.clone());

    store.write(&products).await?;
    tracing::info!(
        "Comment {} has been added to product {}",
        comment.id.canonical(),
        id
    );

    Ok(Some(comment))
}

/// Overwrites the product's `rate`. Returns the updated record, or `Ok(None)`
/// when no product matches `id`.
pub async fn update_rate(
    store: &ProductStore,
    id: &str,
    rate: Value,
) -> Result<Option<models::Product>, StoreError> {
    let _guard = store.lock().await;

    let mut products = store.read().await;
    let Some(index) = products.iter().position(|product| product.matches(id)) else {
        return Ok(None);
    };
    products[index].rate = Some(rate);

    store.write(&products).await?;
    tracing::info!("Rate of product {} has been updated", id);

    Ok(Some(products.swap_remove(index)))
}
