use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Errors that can occur when constructing a month reference.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MonthError {
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
}

/// The displayed month: transient view state, separate from the stored
/// event mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    pub year: i32,
    /// 1..=12, chrono convention.
    pub month: u32,
}

impl MonthRef {
    /// Creates a month reference, validating the month number.
    pub fn new(year: i32, month: u32) -> Result<Self, MonthError> {
        if !(1..=12).contains(&month) {
            return Err(MonthError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing today's date.
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Number of days in this month.
    ///
    /// # Panics
    /// Panics if the year is outside chrono's representable range.
    pub fn days_in_month(&self) -> u8 {
        // Last day of the month is the day before the first of the next one.
        let next = self.next();
        let last = NaiveDate::from_ymd_opt(next.year, next.month, 1)
            .expect("Invalid year/month for days_in_month")
            .pred_opt()
            .expect("Failed to get last day of month");
        last.day() as u8
    }

    /// True if `day` is a real day of this month.
    pub fn contains_day(&self, day: u8) -> bool {
        (1..=self.days_in_month()).contains(&day)
    }

    /// The previous month, crossing year boundaries.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next month, crossing year boundaries.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}
