use crate::domain::ports::Clock;
use crate::error::{PaymentError, Result};
use chrono::{DateTime, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// Reads the operating system's wall clock.
///
/// Fails with `InternalFault` when the system time is set before the Unix
/// epoch or beyond the range `chrono` can represent.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Result<DateTime<Utc>> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| PaymentError::InternalFault(format!("system clock unavailable: {e}")))?;
        let secs = i64::try_from(elapsed.as_secs()).map_err(|_| {
            PaymentError::InternalFault("system clock out of range".to_string())
        })?;
        DateTime::from_timestamp(secs, elapsed.subsec_nanos())
            .ok_or_else(|| PaymentError::InternalFault("system clock out of range".to_string()))
    }
}

/// Always returns the same instant. Used to make records reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime<Utc>> {
        Ok(self.0)
    }
}
