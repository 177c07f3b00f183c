//! Mapping of `PaymentError` onto HTTP responses.

use super::dto::ErrorBody;
use crate::error::PaymentError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub const INVALID_BODY_MESSAGE: &str = "Invalid JSON in request body";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error while generating QR code";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// An error response: status code plus JSON body.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorBody) -> Self {
        Self { status, body }
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            ErrorBody::new(METHOD_NOT_ALLOWED_MESSAGE),
        )
    }
}

impl From<PaymentError> for ApiError {
    fn from(error: PaymentError) -> Self {
        match error {
            PaymentError::InvalidBody(_) => {
                Self::new(StatusCode::BAD_REQUEST, ErrorBody::new(INVALID_BODY_MESSAGE))
            }
            PaymentError::MissingField(_) | PaymentError::InvalidAmount(_) => {
                Self::new(StatusCode::BAD_REQUEST, ErrorBody::new(error.to_string()))
            }
            PaymentError::InternalFault(_)
            | PaymentError::CsvError(_)
            | PaymentError::IoError(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(INTERNAL_ERROR_MESSAGE).with_details(error.to_string()),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
