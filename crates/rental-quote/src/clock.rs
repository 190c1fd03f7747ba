//! The "today" anchor used for year-rollover inference.
//!
//! Nothing else in this crate reads the system clock. Call sites pass a
//! [`Clock`] so tests can pin the date with [`FixedClock`].

use chrono::{Local, NaiveDate};

/// A source for the current local calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
