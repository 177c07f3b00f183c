use crate::error::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of the instant stamped on each payment record.
pub trait Clock: Send + Sync {
    fn now(&self) -> Result<DateTime<Utc>>;
}

pub type ClockRef = Arc<dyn Clock>;
