use crate::db;
use crate::errors::ApiError;
use crate::forms;
use actix_web::{put, web, Responder};

#[tracing::instrument(
    name = "Update product rating.",
    skip(form, store),
    fields(rating = ?form.rating)
)]
#[put("/{product_id}")]
pub async fn rating_edit_handler(
    path: web::Path<String>,
    form: web::Form<forms::EditRating>,
    store: web::Data<db::ProductStore>,
) -> Result<impl Responder, ApiError> {
    let product_id = path.into_inner();

    db::product::update_rate(store.get_ref(), &product_id, form.rate())
        .await
        .map_err(|_| ApiError::Internal("Server error while updating the product rating"))?
        .map(web::Json)
        .ok_or(ApiError::ProductNotFound)
}
