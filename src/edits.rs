use crate::aggregation::{recompute_month, recompute_year_totals};
use crate::error::{Result, SalesDashboardError};
use crate::model::{Dataset, YearRecord};
use crate::utils::{parse_amount, parse_amount_or, validate_month_index};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Monthly form submission. Amounts are the literal field contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEdit {
    pub year: String,
    pub month_index: usize,
    pub day: u32,
    pub new_monthly_target: String,
    pub new_daily_achieved: String,
}

/// Annual form submission. Blank or unusable fields keep the current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualEdit {
    pub year: String,
    #[serde(default)]
    pub new_target: String,
    #[serde(default)]
    pub new_achieved: String,
}

/// Sets the month's target and one day's achieved amount, then re-aggregates
/// the month and its year. The input dataset is left untouched.
pub fn update_monthly_and_daily(dataset: &Dataset, edit: &MonthlyEdit) -> Result<Dataset> {
    let new_target = parse_amount("monthly target", &edit.new_monthly_target)?;
    let new_daily = parse_amount("daily achieved", &edit.new_daily_achieved)?;
    validate_month_index(edit.month_index)?;

    let mut updated = dataset.clone();
    let year = find_year_mut(&mut updated, &edit.year)?;
    let month = year
        .months
        .get_mut(edit.month_index)
        .ok_or(SalesDashboardError::MonthOutOfRange(edit.month_index))?;

    month.target = new_target;

    let day = month
        .day_mut(edit.day)
        .ok_or_else(|| SalesDashboardError::DayNotFound {
            year: edit.year.clone(),
            month_index: edit.month_index,
            day: edit.day,
        })?;
    let previous = day.daily_achieved;
    day.daily_achieved = new_daily;

    recompute_month(month);
    debug!(
        "{} {} day {}: {} -> {}, month achieved now {}",
        edit.year, month.label, edit.day, previous, new_daily, month.achieved
    );

    recompute_year_totals(year);
    info!(
        "Applied monthly edit to {} month #{}: year target {}, achieved {}",
        edit.year, edit.month_index, year.target, year.achieved
    );

    Ok(updated)
}

/// Overwrites the annual totals directly. The months are not reconciled, so the
/// year may afterwards disagree with the sum of its months.
pub fn update_annual(dataset: &Dataset, edit: &AnnualEdit) -> Result<Dataset> {
    let mut updated = dataset.clone();
    let year = find_year_mut(&mut updated, &edit.year)?;

    for (field, raw) in [("target", &edit.new_target), ("achieved", &edit.new_achieved)] {
        if !raw.trim().is_empty() && parse_amount(field, raw).is_err() {
            debug!("Annual {} '{}' is not usable, keeping current value", field, raw);
        }
    }

    let target = parse_amount_or(&edit.new_target, year.target);
    let achieved = parse_amount_or(&edit.new_achieved, year.achieved);

    year.target = target;
    year.achieved = achieved;
    info!(
        "Applied annual override to {}: target {}, achieved {}",
        edit.year, target, achieved
    );

    Ok(updated)
}

fn find_year_mut<'a>(dataset: &'a mut Dataset, year: &str) -> Result<&'a mut YearRecord> {
    dataset
        .get_mut(year)
        .ok_or_else(|| SalesDashboardError::YearNotFound(year.to_string()))
}
