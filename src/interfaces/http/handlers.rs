use super::AppState;
use super::dto::EncodeResponse;
use super::error::ApiError;
use crate::domain::request::PaymentRequest;
use crate::error::PaymentError;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

/// `POST /api/generate-qr`
///
/// The body is decoded by hand instead of through `Json` so that a missing
/// `Content-Type` is tolerated and malformed JSON gets the same error shape as
/// every other failure.
pub async fn generate_qr(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EncodeResponse>, ApiError> {
    let result = serde_json::from_slice::<PaymentRequest>(&body)
        .map_err(PaymentError::from)
        .and_then(|request| state.encoder.process(&request));

    match result {
        Ok(record) => {
            tracing::info!(qr_string = %record.encoded_string, "QR code generated");
            Ok(Json(EncodeResponse::from(record)))
        }
        Err(error) if error.is_client_error() => {
            tracing::warn!(%error, "Rejected payment request");
            Err(error.into())
        }
        Err(error) => {
            tracing::error!(%error, "Error generating QR code");
            Err(error.into())
        }
    }
}

/// Any method other than `POST` (preflight `OPTIONS` is answered by the CORS layer).
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
