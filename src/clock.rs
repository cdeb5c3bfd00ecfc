//! Calendar date source
//!
//! The composed version embeds the date of the run. Code that needs "today"
//! depends on the [Clock] trait so tests can pin the date:
//!
//! - [SystemClock]: the local calendar date from the operating system
//! - [FixedClock]: always returns the same date

use chrono::{Local, NaiveDate};

/// Source of the current calendar date
pub trait Clock {
    /// The current local date
    fn today(&self) -> NaiveDate;
}

/// Reads the date from the system clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Create a clock that always reports `date`
    pub fn new(date: NaiveDate) -> Self {
        FixedClock(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
