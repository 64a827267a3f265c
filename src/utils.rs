use crate::error::{Result, SalesDashboardError};
use chrono::{Datelike, Days, NaiveDate};

pub const MONTHS_PER_YEAR: usize = 12;
pub const MAX_STATUS_TTL_SECONDS: i64 = 86_400;

pub fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.checked_sub_days(Days::new(1)))
        .ok_or_else(|| {
            SalesDashboardError::DateError(format!(
                "Cannot resolve last day of {:04}-{:02}",
                year, month
            ))
        })
}

/// Number of calendar days in the month, with `month_index` 0-based (0 = January).
pub fn days_in_month(year: i32, month_index: usize) -> Result<u32> {
    validate_month_index(month_index)?;
    Ok(last_day_of_month(year, month_index as u32 + 1)?.day())
}

/// Days of the month that have already happened relative to `today`.
/// Only the month containing `today` has elapsed days; every other month has none.
pub fn elapsed_days(year: i32, month_index: usize, today: NaiveDate) -> u32 {
    if today.year() == year && today.month0() as usize == month_index {
        today.day()
    } else {
        0
    }
}

pub fn validate_month_index(month_index: usize) -> Result<()> {
    if month_index >= MONTHS_PER_YEAR {
        return Err(SalesDashboardError::MonthOutOfRange(month_index));
    }
    Ok(())
}

pub fn validate_jitter(jitter: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&jitter) {
        return Err(SalesDashboardError::InvalidJitter(jitter));
    }
    Ok(())
}

pub fn validate_status_ttl(ttl_seconds: i64) -> Result<()> {
    if !(1..=MAX_STATUS_TTL_SECONDS).contains(&ttl_seconds) {
        return Err(SalesDashboardError::InvalidStatusTtl(ttl_seconds));
    }
    Ok(())
}

/// Parses a form field into a finite, non-negative amount.
pub fn parse_amount(field: &str, raw: &str) -> Result<f64> {
    let invalid = || SalesDashboardError::InvalidInput {
        field: field.to_string(),
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(value)
}

/// Parses a form field, keeping `fallback` when the field is blank or not a usable amount.
pub fn parse_amount_or(raw: &str, fallback: f64) -> f64 {
    parse_amount("", raw).unwrap_or(fallback)
}

pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
