//! Age derivation from a date of birth.

use chrono::{Datelike, NaiveDate};

/// Whole years elapsed between `date_of_birth` and `today`.
///
/// The year difference is reduced by one while this year's birthday is
/// still ahead. Returns a negative value for dates in the future.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    years
}
