use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Most significant digits an amount may carry.
pub const MAX_SIGNIFICANT_DIGITS: usize = 28;

/// A strictly positive payment amount.
///
/// Wraps `rust_decimal::Decimal` so the value printed into the payment string
/// is exact: `Display` yields the normalized decimal form (no trailing zeros,
/// never exponent notation). In JSON the amount is written as a number.
///
/// Supported values have at most [`MAX_SIGNIFICANT_DIGITS`] significant
/// digits and lie within `1e-28 ..< 1e28`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Amount(#[serde(serialize_with = "rust_decimal::serde::float::serialize")] Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value.normalize()))
        } else {
            Err(PaymentError::InvalidAmount(value.to_string()))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Decimal literal split into sign, significant digits and a power of ten.
struct Literal {
    negative: bool,
    digits: String,
    exponent: i64,
}

impl Literal {
    /// Accepts `[+-]digits[.digits][(e|E)[+-]digits]`, where either side of
    /// the point may be empty but not both.
    fn parse(text: &str) -> Option<Self> {
        let (negative, rest) = match text.as_bytes().first()? {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };
        let (mantissa, exponent) = match rest.find(['e', 'E']) {
            Some(at) => (&rest[..at], parse_exponent(&rest[at + 1..])?),
            None => (rest, 0),
        };
        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty())
            || !all_digits(integer)
            || !all_digits(fraction)
        {
            return None;
        }

        let mut exponent = exponent.checked_sub(i64::try_from(fraction.len()).ok()?)?;
        let joined = format!("{integer}{fraction}");
        let trimmed = joined.trim_start_matches('0');
        let digits = trimmed.trim_end_matches('0');
        exponent = exponent.checked_add(i64::try_from(trimmed.len() - digits.len()).ok()?)?;

        Some(Self {
            negative,
            digits: digits.to_string(),
            exponent,
        })
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Builds the exact `Decimal`, or `None` when it cannot be held without rounding.
    fn to_decimal(&self) -> Option<Decimal> {
        let whole_digits = if self.exponent > 0 {
            self.digits.len() + usize::try_from(self.exponent).ok()?
        } else {
            self.digits.len()
        };
        if whole_digits > MAX_SIGNIFICANT_DIGITS {
            return None;
        }

        let mut mantissa: i128 = self.digits.parse().ok()?;
        let scale = if self.exponent >= 0 {
            let power = 10i128.checked_pow(u32::try_from(self.exponent).ok()?)?;
            mantissa = mantissa.checked_mul(power)?;
            0
        } else {
            u32::try_from(-self.exponent).ok()?
        };
        if self.negative {
            mantissa = -mantissa;
        }
        Decimal::try_from_i128_with_scale(mantissa, scale).ok()
    }
}

fn parse_exponent(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl FromStr for Amount {
    type Err = PaymentError;

    /// Parses plain (`1500.25`) and scientific (`1.5e3`) notation.
    ///
    /// Anything else (digit separators, `NaN`, trailing garbage) is rejected,
    /// as are values that would need rounding to fit. Errors quote `raw`.
    fn from_str(raw: &str) -> Result<Self> {
        let invalid = || PaymentError::InvalidAmount(raw.to_string());
        let literal = Literal::parse(raw.trim()).ok_or_else(invalid)?;
        if literal.is_zero() || literal.negative {
            return Err(invalid());
        }
        let value = literal.to_decimal().ok_or_else(invalid)?;
        Self::new(value).map_err(|_| invalid())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
