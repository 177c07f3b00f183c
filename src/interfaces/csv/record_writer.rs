use crate::domain::record::PaymentRecord;
use crate::error::Result;
use chrono::SecondsFormat;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordRow<'a> {
    bank_bin: &'a str,
    account_number: &'a str,
    amount: String,
    message: &'a str,
    qr_string: &'a str,
    timestamp: String,
}

impl<'a> From<&'a PaymentRecord> for RecordRow<'a> {
    fn from(record: &'a PaymentRecord) -> Self {
        Self {
            bank_bin: &record.bank_bin,
            account_number: &record.account_number,
            amount: record.amount.to_string(),
            message: &record.message,
            qr_string: &record.encoded_string,
            timestamp: record.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Writes encoded payment records as CSV.
///
/// The amount column uses the same normalized form as the payment string.
pub struct RecordWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_record(&mut self, record: &PaymentRecord) -> Result<()> {
        self.writer.serialize(RecordRow::from(record))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
