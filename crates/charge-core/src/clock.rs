//! # Clock
//!
//! Injectable "current date" source for expiry validation. Gateways take a
//! `Clock` rather than reading wall-clock time, so expiry checks are
//! deterministic under test.

use chrono::{NaiveDate, Utc};

/// Capability trait providing the current date.
///
/// Expiry comparison is date-only; nothing in the pipeline needs
/// time-of-day resolution.
pub trait Clock: Send + Sync {
    /// The current date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time (UTC). The production clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock frozen at a fixed date, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    /// Create a clock pinned to the given date.
    ///
    /// # Panics
    ///
    /// Panics if the year/month/day do not form a valid calendar date.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            date: NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date"),
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
