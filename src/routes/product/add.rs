use crate::db;
use crate::errors::ApiError;
use crate::forms;
use crate::models;
use crate::routes::text_ok;
use actix_web::{post, web, HttpResponse};

#[tracing::instrument(name = "Add product comment.", skip(form, store))]
#[post("/{product_id}")]
pub async fn comment_add_handler(
    path: web::Path<String>,
    form: web::Form<forms::AddComment>,
    store: web::Data<db::ProductStore>,
) -> Result<HttpResponse, ApiError> {
    let product_id = path.into_inner();
    let form = form.into_inner();
    tracing::debug!(email = ?form.email, comment = ?form.comment, "Comment form received");

    db::product::add_comment(store.get_ref(), &product_id, models::Comment::from(form))
        .await
        .map_err(|_| ApiError::Internal("Server error while adding the comment"))?
        .map(|_| text_ok("Comment added successfully"))
        .ok_or(ApiError::ProductNotFound)
}
