//! Age calculation with an injectable clock.

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};

use crate::birth_date::parse_birth_date;
use crate::error::{DomainError, DomainResult};

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// Today's date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Whole years elapsed between `birth` and `today`.
///
/// One year is subtracted while this year's birthday is still ahead, so a
/// February 29 birthday only counts on March 1 in common years.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> DomainResult<u32> {
    // Ages are unsigned; a birth date after today has no age to report
    if birth > today {
        return Err(DomainError::validation("birth date is in the future"));
    }

    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }

    u32::try_from(years).map_err(|_| DomainError::internal("age out of range"))
}

/// Age calculator bound to a clock.
#[derive(Debug, Clone, Default)]
pub struct AgeCalculator<C = SystemClock> {
    clock: C,
}

impl<C: Clock> AgeCalculator<C> {
    /// Create a calculator reading "now" from the given clock
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Age of someone born on `birth`, as of the clock's today
    pub fn age_of(&self, birth: NaiveDate) -> DomainResult<u32> {
        calculate_age(birth, self.clock.today())
    }

    /// Age from raw, possibly missing, birth date input
    pub fn age_from_input(&self, input: Option<&str>) -> DomainResult<u32> {
        let raw = input.ok_or_else(|| DomainError::validation("birth date is required"))?;
        self.age_of(parse_birth_date(raw)?)
    }
}
