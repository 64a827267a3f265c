use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day of a month's breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    /// 1-based ordinal within the month
    pub day: u32,
    pub daily_achieved: f64,
    /// Running total of `daily_achieved` up to and including this day
    pub accumulated_achieved: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRecord {
    pub label: String,
    pub target: f64,
    pub achieved: f64,
    pub days: Vec<DayRecord>,
}

impl MonthRecord {
    pub fn day(&self, day: u32) -> Option<&DayRecord> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn day_mut(&mut self, day: u32) -> Option<&mut DayRecord> {
        self.days.iter_mut().find(|d| d.day == day)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub year: i32,
    pub target: f64,
    pub achieved: f64,
    /// Always 12 entries, index 0 = January
    pub months: Vec<MonthRecord>,
}

/// All supported years keyed by their four-digit year string.
pub type Dataset = BTreeMap<String, YearRecord>;
