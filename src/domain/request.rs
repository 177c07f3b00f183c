use super::amount::Amount;
use crate::error::{PaymentError, Result};
use serde::Deserialize;

/// The amount as supplied by the caller: clients send either `"100000"` or `100000`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum RawAmount {
    Text(String),
    Number(serde_json::Number),
}

impl RawAmount {
    /// `""` and a numeric zero carry no amount at all.
    fn is_empty(&self) -> bool {
        match self {
            RawAmount::Text(text) => text.is_empty(),
            RawAmount::Number(number) => number.as_f64() == Some(0.0),
        }
    }

    fn parse(&self) -> Result<Amount> {
        match self {
            RawAmount::Text(text) => text.parse(),
            RawAmount::Number(number) => number.to_string().parse(),
        }
    }
}

/// An untrusted encode request, as decoded from a JSON body or a CSV row.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub bank_bin_code: Option<String>,
    pub bank_account: Option<String>,
    pub amount: Option<RawAmount>,
    pub message: Option<String>,
}

/// A request whose required fields are present and whose amount is positive.
#[derive(Debug, PartialEq, Clone)]
pub struct ValidatedRequest {
    pub bank_bin: String,
    pub account_number: String,
    pub amount: Amount,
    /// The message exactly as supplied, not yet sanitized.
    pub message: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl PaymentRequest {
    /// Checks required fields first, then the amount.
    ///
    /// Every missing field is reported at once; the amount is only parsed
    /// when nothing is missing.
    pub fn validate(&self) -> Result<ValidatedRequest> {
        let bank_bin = present(&self.bank_bin_code);
        let account_number = present(&self.bank_account);
        let amount = self.amount.as_ref().filter(|a| !a.is_empty());

        let mut missing = Vec::new();
        if bank_bin.is_none() {
            missing.push("bankBinCode");
        }
        if account_number.is_none() {
            missing.push("bankAccount");
        }
        if amount.is_none() {
            missing.push("amount");
        }

        let (Some(bank_bin), Some(account_number), Some(amount)) =
            (bank_bin, account_number, amount)
        else {
            return Err(PaymentError::MissingField(missing));
        };

        Ok(ValidatedRequest {
            bank_bin: bank_bin.to_string(),
            account_number: account_number.to_string(),
            amount: amount.parse()?,
            message: self.message.clone(),
        })
    }
}
