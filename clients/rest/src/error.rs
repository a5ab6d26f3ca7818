use actix_web::{body::BoxBody, http::StatusCode, HttpResponse, ResponseError};
use database::database::{request_manager::RequestManagerError, table::table::ApplyErrors};
use serde::Serialize;
use thiserror::Error;

/// Every failure the http layer can respond with. Only the fixed message is sent to the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid data format")]
    InvalidInput,
    #[error("Person not found")]
    NotFound,
    #[error("Endpoint not found")]
    RouteNotFound,
    /// Detail is logged, never returned
    #[error("Internal server error")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorMessage<'a> {
    message: &'a str,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        if let ApiError::Internal(detail) = self {
            log::error!("Internal error handling request: {}", detail);
        }

        HttpResponse::build(self.status_code()).json(ErrorMessage {
            message: &self.to_string(),
        })
    }
}

impl From<RequestManagerError> for ApiError {
    fn from(err: RequestManagerError) -> Self {
        match err {
            RequestManagerError::Apply(apply) if apply.is_not_found() => ApiError::NotFound,
            RequestManagerError::Apply(ApplyErrors::InvalidInput(_)) => ApiError::InvalidInput,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<actix_web::error::BlockingError> for ApiError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
