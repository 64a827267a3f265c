use crate::aggregation::refresh_accumulated;
use crate::error::{Result, SalesDashboardError};
use crate::model::DayRecord;
use crate::utils::{days_in_month, elapsed_days, validate_jitter};
use chrono::NaiveDate;
use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Expands a month's achieved total into a plausible day-by-day breakdown.
///
/// Only days that have already happened receive a share. Each share is the
/// remaining amount split evenly over the remaining elapsed days, perturbed by
/// up to `jitter` in either direction (except on the last elapsed day). Whatever
/// drift that leaves is booked on the last calendar day so the days always add
/// up to the month total exactly.
pub struct DailySeriesGenerator {
    jitter: f64,
}

impl DailySeriesGenerator {
    pub fn new(jitter: f64) -> Result<Self> {
        validate_jitter(jitter)?;
        Ok(Self { jitter })
    }

    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        month_index: usize,
        year: i32,
        monthly_target: f64,
        monthly_achieved: f64,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<DayRecord>> {
        let total_days = days_in_month(year, month_index)?;
        let elapsed = elapsed_days(year, month_index, today);

        debug!(
            "Generating {} days for {:04}-{:02} (target {}, achieved {}, {} elapsed)",
            total_days,
            year,
            month_index + 1,
            monthly_target,
            monthly_achieved,
            elapsed
        );

        self.distribute(total_days, elapsed, monthly_achieved, rng)
    }

    pub fn distribute<R: Rng + ?Sized>(
        &self,
        total_days: u32,
        elapsed: u32,
        monthly_achieved: f64,
        rng: &mut R,
    ) -> Result<Vec<DayRecord>> {
        if !monthly_achieved.is_finite() || monthly_achieved < 0.0 {
            return Err(SalesDashboardError::InvalidInput {
                field: "monthly_achieved".to_string(),
                value: monthly_achieved.to_string(),
            });
        }
        if elapsed > total_days {
            return Err(SalesDashboardError::DateError(format!(
                "{} elapsed days exceed a {}-day month",
                elapsed, total_days
            )));
        }

        let factor = Uniform::new_inclusive(1.0 - self.jitter, 1.0 + self.jitter);

        let mut days: Vec<DayRecord> = Vec::with_capacity(total_days as usize);
        let mut remaining = monthly_achieved;
        let mut remaining_days = elapsed;

        for day in 1..=total_days {
            let mut daily_achieved = 0.0;

            if day <= elapsed {
                let share = (remaining / remaining_days as f64).floor();
                daily_achieved = if day < elapsed {
                    (share * factor.sample(rng)).round().max(0.0)
                } else {
                    share
                };
                remaining -= daily_achieved;
                remaining_days -= 1;
            }

            days.push(DayRecord {
                day,
                daily_achieved,
                accumulated_achieved: 0.0,
            });
        }

        // Book the rounding drift on the last calendar day, even when it is still in the future.
        let assigned: f64 = days.iter().map(|d| d.daily_achieved).sum();
        if let Some(last) = days.last_mut() {
            last.daily_achieved += monthly_achieved - assigned;
        }

        refresh_accumulated(&mut days);

        Ok(days)
    }
}

impl Default for DailySeriesGenerator {
    fn default() -> Self {
        Self {
            jitter: crate::config::DEFAULT_JITTER,
        }
    }
}
