use crate::domain::record::PaymentRecord;
use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "QR code generated successfully";

/// Body of a successful encode response.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EncodeResponse {
    pub success: bool,
    pub qr_code_string: String,
    pub data: PaymentRecord,
    pub message: &'static str,
}

impl From<PaymentRecord> for EncodeResponse {
    fn from(record: PaymentRecord) -> Self {
        Self {
            success: true,
            qr_code_string: record.encoded_string.clone(),
            data: record,
            message: SUCCESS_MESSAGE,
        }
    }
}

/// Body of every failed response.
#[derive(Debug, Serialize, Clone)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
