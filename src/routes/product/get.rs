use crate::db;
use crate::errors::ApiError;
use actix_web::{get, web, Responder};

#[tracing::instrument(name = "List products.", skip(store))]
#[get("/products")]
pub async fn list_handler(store: web::Data<db::ProductStore>) -> Result<impl Responder, ApiError> {
    let products = db::product::fetch_all(store.get_ref()).await;
    Ok(web::Json(products))
}

#[tracing::instrument(name = "List product comments.", skip(store))]
#[get("/{product_id}")]
pub async fn comments_handler(
    path: web::Path<String>,
    store: web::Data<db::ProductStore>,
) -> Result<impl Responder, ApiError> {
    let product_id = path.into_inner();
    db::product::fetch_comments(store.get_ref(), &product_id)
        .await
        .map(web::Json)
        .ok_or(ApiError::ProductNotFound)
}
