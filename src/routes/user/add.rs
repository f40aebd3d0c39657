use crate::db;
use crate::db::user::Registration;
use crate::errors::ApiError;
use crate::forms;
use crate::routes::text_ok;
use actix_web::{post, web, HttpResponse};

#[tracing::instrument(
    name = "Register user.",
    skip(form, store),
    fields(email = %form.contact_email)
)]
#[post("/register")]
pub async fn register_handler(
    form: web::Form<forms::Register>,
    store: web::Data<db::UserStore>,
) -> Result<HttpResponse, ApiError> {
    let user = form.into_inner().into_user();

    match db::user::register(store.get_ref(), user).await {
        Ok(Registration::Created(_)) => Ok(text_ok("User successfully registered")),
        Ok(Registration::DuplicateEmail) => Err(ApiError::DuplicateEmail),
        Err(_) => Err(ApiError::Internal("Server error while registering the user")),
    }
}
