//! Chart-ready series derived from a dataset snapshot.
//!
//! Nothing here mutates its input; each builder returns a fresh sequence that
//! the presentation layer can plot directly.

use crate::model::MonthRecord;
use crate::utils::round_to_two_decimals;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativePoint {
    pub label: String,
    pub accumulated_target: f64,
    pub accumulated_achieved: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    pub label: String,
    pub target: f64,
    pub achieved: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub day: u32,
    pub daily_achieved: f64,
    pub accumulated_achieved: f64,
}

/// Two slices of a radial gauge: what was achieved and what is still missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeSegments {
    pub achieved: f64,
    pub remaining: f64,
}

/// Percentage of target achieved, or `NotAvailable` when there is no target to compare with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "percent", rename_all = "snake_case")]
pub enum Progress {
    Percent(f64),
    NotAvailable,
}

impl Progress {
    pub fn percent(&self) -> Option<f64> {
        match self {
            Progress::Percent(p) => Some(*p),
            Progress::NotAvailable => None,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::Percent(p) => write!(f, "{:.2}%", p),
            Progress::NotAvailable => write!(f, "N/A"),
        }
    }
}

/// Inclusive running totals of target and achieved across the months.
pub fn build_cumulative(months: &[MonthRecord]) -> Vec<CumulativePoint> {
    let mut accumulated_target = 0.0;
    let mut accumulated_achieved = 0.0;

    months
        .iter()
        .map(|month| {
            accumulated_target += month.target;
            accumulated_achieved += month.achieved;
            CumulativePoint {
                label: month.label.clone(),
                accumulated_target,
                accumulated_achieved,
            }
        })
        .collect()
}

pub fn monthly_series(months: &[MonthRecord]) -> Vec<MonthlyPoint> {
    months
        .iter()
        .map(|month| MonthlyPoint {
            label: month.label.clone(),
            target: month.target,
            achieved: month.achieved,
        })
        .collect()
}

pub fn daily_series(month: &MonthRecord) -> Vec<DailyPoint> {
    month
        .days
        .iter()
        .map(|d| DailyPoint {
            day: d.day,
            daily_achieved: d.daily_achieved,
            accumulated_achieved: d.accumulated_achieved,
        })
        .collect()
}

pub fn progress(achieved: f64, target: f64) -> Progress {
    if target == 0.0 {
        return Progress::NotAvailable;
    }

    let ratio = achieved / target * 100.0;
    if !ratio.is_finite() {
        return Progress::NotAvailable;
    }
    Progress::Percent(round_to_two_decimals(ratio))
}

pub fn gauge(achieved: f64, target: f64) -> GaugeSegments {
    GaugeSegments {
        achieved,
        remaining: (target - achieved).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DayRecord;

    fn month(label: &str, target: f64, achieved: f64) -> MonthRecord {
        MonthRecord {
            label: label.to_string(),
            target,
            achieved,
            days: vec![],
        }
    }

    #[test]
    fn test_build_cumulative_prefix_sums() {
        let months = vec![
            month("Jan", 10000.0, 9500.0),
            month("Fev", 11000.0, 10500.0),
            month("Mar", 12000.0, 12200.0),
        ];

        let cumulative = build_cumulative(&months);

        assert_eq!(cumulative.len(), 3);
        assert_eq!(cumulative[0].accumulated_target, 10000.0);
        assert_eq!(cumulative[2].accumulated_target, 33000.0);
        assert_eq!(cumulative[2].accumulated_achieved, 32200.0);
        for i in 1..cumulative.len() {
            assert_eq!(
                cumulative[i].accumulated_achieved,
                cumulative[i - 1].accumulated_achieved + months[i].achieved
            );
        }
        assert_eq!(months[0].achieved, 9500.0);
    }

    #[test]
    fn test_build_cumulative_empty() {
        assert!(build_cumulative(&[]).is_empty());
    }

    #[test]
    fn test_daily_series_mirrors_days() {
        let mut m = month("Jan", 100.0, 30.0);
        m.days = vec![
            DayRecord {
                day: 1,
                daily_achieved: 10.0,
                accumulated_achieved: 10.0,
            },
            DayRecord {
                day: 2,
                daily_achieved: 20.0,
                accumulated_achieved: 30.0,
            },
        ];

        let points = daily_series(&m);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].day, 2);
        assert_eq!(points[1].accumulated_achieved, 30.0);

        let monthly = monthly_series(&[m]);
        assert_eq!(monthly[0].target, 100.0);
        assert_eq!(monthly[0].achieved, 30.0);
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(9800.0, 10000.0), Progress::Percent(98.0));
        assert_eq!(progress(1.0, 3.0), Progress::Percent(33.33));
        assert_eq!(progress(0.0, 0.0), Progress::NotAvailable);
        assert_eq!(progress(500.0, 0.0), Progress::NotAvailable);
        assert_eq!(progress(0.0, 0.0).percent(), None);
    }

    #[test]
    fn test_progress_display() {
        assert_eq!(progress(9800.0, 10000.0).to_string(), "98.00%");
        assert_eq!(progress(0.0, 0.0).to_string(), "N/A");
    }

    #[test]
    fn test_gauge_never_negative() {
        assert_eq!(
            gauge(9800.0, 10000.0),
            GaugeSegments {
                achieved: 9800.0,
                remaining: 200.0
            }
        );
        assert_eq!(gauge(12200.0, 12000.0).remaining, 0.0);
    }
}
