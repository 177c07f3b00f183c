use crate::domain::message::sanitize_message;
use crate::domain::ports::ClockRef;
use crate::domain::record::{PAYMENT_STRING_VERSION, PaymentRecord, format_payment_string};
use crate::domain::request::{PaymentRequest, ValidatedRequest};
use crate::error::Result;

/// The main entry point for turning payment requests into payment strings.
///
/// `PaymentStringEncoder` holds no per-request state: a single instance can be
/// shared behind an `Arc` and called from any number of tasks at once. The
/// clock is the only collaborator and is only ever read.
pub struct PaymentStringEncoder {
    clock: ClockRef,
}

impl PaymentStringEncoder {
    /// Creates a new `PaymentStringEncoder`.
    ///
    /// # Arguments
    ///
    /// * `clock` - Source of the timestamp stamped on each record.
    pub fn new(clock: ClockRef) -> Self {
        Self { clock }
    }

    /// Validates and encodes a request in one pass.
    ///
    /// Fails fast: a request that does not validate never reaches the clock.
    pub fn process(&self, request: &PaymentRequest) -> Result<PaymentRecord> {
        let validated = request.validate()?;
        self.encode(validated)
    }

    /// Builds the payment string and its metadata record.
    pub fn encode(&self, request: ValidatedRequest) -> Result<PaymentRecord> {
        let sanitized = request
            .message
            .as_deref()
            .map(sanitize_message)
            .unwrap_or_default();
        let encoded_string = format_payment_string(
            &request.bank_bin,
            &request.account_number,
            request.amount,
            &sanitized,
        );
        let timestamp = self.clock.now()?;

        tracing::debug!(
            bank_bin = %request.bank_bin,
            amount = %request.amount,
            has_message = !sanitized.is_empty(),
            "Encoded payment string"
        );

        Ok(PaymentRecord {
            version: PAYMENT_STRING_VERSION.to_string(),
            bank_bin: request.bank_bin,
            account_number: request.account_number,
            amount: request.amount,
            message: request.message.unwrap_or_default(),
            timestamp,
            encoded_string,
        })
    }
}
