use crate::domain::request::{PaymentRequest, RawAmount};
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestRow {
    bank_bin_code: Option<String>,
    bank_account: Option<String>,
    amount: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

fn trimmed(cell: Option<String>) -> Option<String> {
    cell.map(|value| value.trim().to_string())
}

impl From<RequestRow> for PaymentRequest {
    fn from(row: RequestRow) -> Self {
        Self {
            bank_bin_code: trimmed(row.bank_bin_code),
            bank_account: trimmed(row.bank_account),
            amount: trimmed(row.amount).map(RawAmount::Text),
            message: row.message,
        }
    }
}

/// Reads payment requests from a CSV source.
///
/// Expects the header `bankBinCode,bankAccount,amount,message`. Headers and the
/// bank/amount cells are whitespace-trimmed; the `message` cell is passed on
/// verbatim. The trailing `message` column may be omitted.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    ///
    /// Rows are not validated here; an empty cell simply becomes an absent field.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize::<RequestRow>()
            .map(|result| result.map(PaymentRequest::from).map_err(PaymentError::from))
    }
}
