use actix_web::{error::ResponseError, http::header::ContentType, http::StatusCode, HttpResponse};

/// Errors surfaced to HTTP clients. Bodies are plain human-readable text.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("User with this email is already registered")]
    DuplicateEmail,
    #[error("Product not found")]
    ProductNotFound,
    #[error("{0}")]
    Internal(&'static str),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::ProductNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
