//! Calendar date generators.

use crate::generator::GeneratorError;
use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Build a calendar date, failing on impossible dates.
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, GeneratorError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(GeneratorError::InvalidDate { year, month, day })
}

/// Shift a date forward by `days`.
pub fn add_days(start: NaiveDate, days: i64) -> Result<NaiveDate, GeneratorError> {
    start
        .checked_add_signed(Duration::days(days))
        .ok_or(GeneratorError::DateOverflow { start, days })
}

/// First and last day of `year`.
pub fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate), GeneratorError> {
    Ok((date(year, 1, 1)?, date(year, 12, 31)?))
}

/// Generate a random date in the window `[start, start + days)`.
pub fn generate_date_in_window<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    days: u32,
) -> Result<NaiveDate, GeneratorError> {
    let offset = rng.gen_range(0..days.max(1));
    add_days(start, i64::from(offset))
}

/// Generate a promotion window inside `year`.
///
/// The start falls on day 1-28 of a month in `1..=last_start_month`, so every
/// month is valid. The window lasts `min_days..=max_days` and may run into
/// the following year.
pub fn generate_promo_window<R: Rng>(
    rng: &mut R,
    year: i32,
    last_start_month: u32,
    min_days: i64,
    max_days: i64,
) -> Result<(NaiveDate, NaiveDate), GeneratorError> {
    let month = rng.gen_range(1..=last_start_month);
    let day = rng.gen_range(1..=28);
    let start = date(year, month, day)?;
    let end = add_days(start, rng.gen_range(min_days..=max_days))?;
    Ok((start, end))
}
