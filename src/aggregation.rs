use crate::error::{Result, SalesDashboardError};
use crate::model::{Dataset, DayRecord, MonthRecord, YearRecord};
use log::warn;

/// Rewrites every day's running total from scratch and returns the final total.
pub fn refresh_accumulated(days: &mut [DayRecord]) -> f64 {
    let mut accumulated = 0.0;
    for day in days.iter_mut() {
        accumulated += day.daily_achieved;
        day.accumulated_achieved = accumulated;
    }
    accumulated
}

pub fn recompute_month(month: &mut MonthRecord) {
    month.achieved = refresh_accumulated(&mut month.days);
}

pub fn recompute_year_totals(year: &mut YearRecord) {
    year.target = year.months.iter().map(|m| m.target).sum();
    year.achieved = year.months.iter().map(|m| m.achieved).sum();
}

/// Bottom-up: days, then months, then the year.
pub fn recompute_year(year: &mut YearRecord) {
    for month in &mut year.months {
        recompute_month(month);
    }
    recompute_year_totals(year);
}

#[derive(Debug, Clone, Default)]
pub struct ConsistencyReport {
    pub is_consistent: bool,
    pub warnings: Vec<String>,
}

/// Fails on the first aggregate that disagrees with its breakdown by more than `tolerance`.
pub fn verify_year(year: &YearRecord, tolerance: f64) -> Result<()> {
    for month in &year.months {
        let day_sum: f64 = month.days.iter().map(|d| d.daily_achieved).sum();
        check(
            format!("{} {} achieved", year.year, month.label),
            day_sum,
            month.achieved,
            tolerance,
        )?;

        let last_accumulated = month.days.last().map_or(0.0, |d| d.accumulated_achieved);
        check(
            format!("{} {} accumulated", year.year, month.label),
            month.achieved,
            last_accumulated,
            tolerance,
        )?;
    }

    let target_sum: f64 = year.months.iter().map(|m| m.target).sum();
    let achieved_sum: f64 = year.months.iter().map(|m| m.achieved).sum();
    check(format!("{} target", year.year), target_sum, year.target, tolerance)?;
    check(
        format!("{} achieved", year.year),
        achieved_sum,
        year.achieved,
        tolerance,
    )?;

    Ok(())
}

fn check(scope: String, expected: f64, actual: f64, tolerance: f64) -> Result<()> {
    if (expected - actual).abs() > tolerance {
        return Err(SalesDashboardError::AggregateMismatch {
            scope,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Collects every inconsistency across the dataset without touching it.
/// Annual overrides intentionally leave years out of sync with their months;
/// they are reported here rather than corrected.
pub fn check_dataset(dataset: &Dataset, tolerance: f64) -> ConsistencyReport {
    let mut warnings = Vec::new();

    for year in dataset.values() {
        for month in &year.months {
            let non_decreasing = month
                .days
                .windows(2)
                .all(|pair| pair[1].accumulated_achieved >= pair[0].accumulated_achieved);
            if !non_decreasing {
                warnings.push(format!(
                    "{} {}: accumulated series decreases",
                    year.year, month.label
                ));
            }
        }

        if let Err(e) = verify_year(year, tolerance) {
            warnings.push(e.to_string());
        }
    }

    for warning in &warnings {
        warn!("Consistency check: {}", warning);
    }

    ConsistencyReport {
        is_consistent: warnings.is_empty(),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(label: &str, target: f64, daily: &[f64]) -> MonthRecord {
        MonthRecord {
            label: label.to_string(),
            target,
            achieved: 0.0,
            days: daily
                .iter()
                .enumerate()
                .map(|(i, &v)| DayRecord {
                    day: i as u32 + 1,
                    daily_achieved: v,
                    accumulated_achieved: 0.0,
                })
                .collect(),
        }
    }

    fn sample_year() -> YearRecord {
        YearRecord {
            year: 2025,
            target: 0.0,
            achieved: 0.0,
            months: vec![
                month("Jan", 1000.0, &[100.0, 200.0, 300.0]),
                month("Fev", 2000.0, &[50.0, 0.0, 25.0]),
            ],
        }
    }

    #[test]
    fn test_refresh_accumulated() {
        let mut m = month("Jan", 0.0, &[1.0, 2.0, 3.0, 0.0]);
        let total = refresh_accumulated(&mut m.days);
        assert_eq!(total, 6.0);
        let acc: Vec<f64> = m.days.iter().map(|d| d.accumulated_achieved).collect();
        assert_eq!(acc, vec![1.0, 3.0, 6.0, 6.0]);
    }

    #[test]
    fn test_recompute_year_bottom_up() {
        let mut year = sample_year();
        recompute_year(&mut year);

        assert_eq!(year.months[0].achieved, 600.0);
        assert_eq!(year.months[1].achieved, 75.0);
        assert_eq!(year.target, 3000.0);
        assert_eq!(year.achieved, 675.0);
        assert!(verify_year(&year, 0.0).is_ok());
    }

    #[test]
    fn test_empty_month_aggregates_to_zero() {
        let mut m = month("Jan", 10.0, &[]);
        recompute_month(&mut m);
        assert_eq!(m.achieved, 0.0);
    }

    #[test]
    fn test_verify_detects_stale_year_total() {
        let mut year = sample_year();
        recompute_year(&mut year);
        year.achieved = 50_000.0;

        let result = verify_year(&year, 0.01);
        assert!(matches!(
            result,
            Err(SalesDashboardError::AggregateMismatch { .. })
        ));
    }

    #[test]
    fn test_check_dataset_reports_without_fixing() {
        let mut year = sample_year();
        recompute_year(&mut year);
        year.months[1].days[2].accumulated_achieved = 10.0;

        let mut dataset = Dataset::new();
        dataset.insert("2025".to_string(), year.clone());

        let report = check_dataset(&dataset, 0.01);
        assert!(!report.is_consistent);
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(dataset.get("2025"), Some(&year));
    }
}
