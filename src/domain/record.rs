use super::amount::Amount;
use super::message::DELIMITER;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Protocol version stamped on every record.
pub const PAYMENT_STRING_VERSION: &str = "1.0";

/// Joins the payment-string fields with the delimiter.
///
/// The message field is only written when `message` is non-empty, so the
/// result has either three or four fields and never ends with a delimiter.
pub fn format_payment_string(
    bank_bin: &str,
    account_number: &str,
    amount: Amount,
    message: &str,
) -> String {
    let mut encoded = format!("{bank_bin}{DELIMITER}{account_number}{DELIMITER}{amount}");
    if !message.is_empty() {
        encoded.push(DELIMITER);
        encoded.push_str(message);
    }
    encoded
}

/// Metadata returned alongside the encoded payment string.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub version: String,
    pub bank_bin: String,
    pub account_number: String,
    pub amount: Amount,
    /// The caller's message as supplied; the encoded string holds the sanitized form.
    pub message: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "qrString")]
    pub encoded_string: String,
}

fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
