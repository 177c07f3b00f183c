use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingField(Vec<&'static str>),
    #[error("Amount must be a positive number, got '{0}'")]
    InvalidAmount(String),
    #[error("Invalid JSON in request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("Internal fault: {0}")]
    InternalFault(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PaymentError {
    /// Whether the error was caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PaymentError::MissingField(_)
                | PaymentError::InvalidAmount(_)
                | PaymentError::InvalidBody(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
