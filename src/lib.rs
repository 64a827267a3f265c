//! # Sales Target Dashboard
//!
//! The data-shaping core of a dashboard that compares monthly and annual sales
//! targets with what was actually achieved.
//!
//! ## Core Concepts
//!
//! - **Source**: the static yearly payload (12 monthly target/achieved pairs per year)
//! - **Daily series**: each month's achieved total spread over the days that have
//!   already elapsed, with the rounding drift booked on the last day of the month
//! - **Aggregates**: month totals are always the sum of their days and year totals
//!   the sum of their months, except after an explicit annual override
//! - **Snapshots**: edits never mutate a dataset; they return a new one
//!
//! ## Example
//!
//! ```rust,ignore
//! use sales_target_dashboard::*;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
//! let mut dashboard =
//!     SalesDashboard::new(builtin_source()?, DashboardConfig::seeded(7), today)?;
//!
//! dashboard.submit_monthly_edit("13000", "450", chrono::Utc::now());
//!
//! let cumulative = build_cumulative(&dashboard.current_year()?.months);
//! println!("{}", dashboard.monthly_progress()?);
//! ```

pub mod aggregation;
pub mod config;
pub mod dashboard;
pub mod edits;
pub mod error;
pub mod generator;
pub mod ingestion;
pub mod model;
pub mod schema;
pub mod series;
pub mod status;
pub mod utils;
pub mod view;

pub use aggregation::{
    check_dataset, recompute_month, recompute_year, recompute_year_totals, refresh_accumulated,
    verify_year, ConsistencyReport,
};
pub use config::DashboardConfig;
pub use dashboard::SalesDashboard;
pub use edits::{update_annual, update_monthly_and_daily, AnnualEdit, MonthlyEdit};
pub use error::{Result, SalesDashboardError};
pub use generator::DailySeriesGenerator;
pub use ingestion::*;
pub use model::*;
pub use schema::*;
pub use series::*;
pub use status::{StatusBoard, StatusKind, StatusMessage};
pub use view::{available_years, MonthlyFormDefaults, ViewState};

use chrono::NaiveDate;
use log::{debug, info};
use rand::Rng;

pub struct DatasetBuilder;

impl DatasetBuilder {
    /// Validates the source, synthesizes every month's days and recomputes all
    /// totals. The annual figures supplied in the source are replaced.
    pub fn build<R: Rng + ?Sized>(
        source: &SalesSource,
        generator: &DailySeriesGenerator,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Dataset> {
        source.validate()?;

        info!("Building sales dataset for {} years", source.years.len());

        let mut dataset = Dataset::new();
        for (key, year_source) in &source.years {
            let year = parse_year_key(key)?;

            let months = year_source
                .monthly_data
                .iter()
                .enumerate()
                .map(|(index, month)| -> Result<MonthRecord> {
                    let days = generator.generate(
                        index,
                        year,
                        month.target,
                        month.achieved,
                        today,
                        &mut *rng,
                    )?;
                    Ok(MonthRecord {
                        label: month.label.clone(),
                        target: month.target,
                        achieved: month.achieved,
                        days,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            let mut record = YearRecord {
                year,
                target: year_source.yearly_data.target,
                achieved: year_source.yearly_data.achieved,
                months,
            };
            recompute_year(&mut record);

            debug!(
                "Year {}: target {} (source said {}), achieved {} (source said {})",
                key,
                record.target,
                year_source.yearly_data.target,
                record.achieved,
                year_source.yearly_data.achieved
            );

            dataset.insert(key.clone(), record);
        }

        Ok(dataset)
    }

    pub fn build_with_verification<R: Rng + ?Sized>(
        source: &SalesSource,
        generator: &DailySeriesGenerator,
        today: NaiveDate,
        rng: &mut R,
        tolerance: f64,
    ) -> Result<Dataset> {
        let dataset = Self::build(source, generator, today, rng)?;

        for year in dataset.values() {
            verify_year(year, tolerance)?;
        }

        Ok(dataset)
    }
}

pub fn build_dataset(
    source: &SalesSource,
    config: &DashboardConfig,
    today: NaiveDate,
) -> Result<Dataset> {
    config.validate()?;
    let generator = DailySeriesGenerator::new(config.jitter)?;
    DatasetBuilder::build(source, &generator, today, &mut config.rng())
}

fn parse_year_key(key: &str) -> Result<i32> {
    key.trim()
        .parse()
        .map_err(|_| SalesDashboardError::InvalidSource {
            year: key.to_string(),
            details: "Year key is not a number".to_string(),
        })
}
