pub(crate) mod product;
pub(crate) mod user;

use actix_web::{http::header::ContentType, HttpResponse};

pub(crate) fn text_ok(message: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(message)
}
