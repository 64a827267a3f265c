use crate::error::{Result, SalesDashboardError};
use crate::model::{Dataset, DayRecord, MonthRecord, YearRecord};
use crate::utils::validate_month_index;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Values the monthly form shows before the user types anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFormDefaults {
    pub monthly_target: f64,
    pub daily_achieved: f64,
}

/// Which slice of the dataset the dashboard is looking at.
///
/// Selection never touches the dataset; the projections borrow from whatever
/// snapshot is passed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub selected_year: String,
    pub selected_month_index: usize,
    pub selected_day: u32,
}

impl ViewState {
    /// Starts on today's year when the dataset has it, otherwise on the first year available.
    pub fn initial(dataset: &Dataset, today: NaiveDate) -> Result<Self> {
        let current = today.year().to_string();
        let year = if dataset.contains_key(&current) {
            current
        } else {
            dataset
                .keys()
                .next()
                .cloned()
                .ok_or_else(|| SalesDashboardError::YearNotFound(current.clone()))?
        };

        let mut view = Self {
            selected_year: year.clone(),
            selected_month_index: 0,
            selected_day: 1,
        };
        view.select_year(dataset, &year, today)?;
        Ok(view)
    }

    pub fn select_year(&mut self, dataset: &Dataset, year: &str, today: NaiveDate) -> Result<()> {
        if !dataset.contains_key(year) {
            return Err(SalesDashboardError::YearNotFound(year.to_string()));
        }

        self.selected_year = year.to_string();
        if year == today.year().to_string() {
            self.selected_month_index = today.month0() as usize;
            self.selected_day = today.day();
        } else {
            self.selected_month_index = 0;
            self.selected_day = 1;
        }
        Ok(())
    }

    pub fn select_month(&mut self, dataset: &Dataset, month_index: usize) -> Result<()> {
        validate_month_index(month_index)?;
        self.current_year(dataset)?;
        self.selected_month_index = month_index;
        self.selected_day = 1;
        Ok(())
    }

    pub fn select_day(&mut self, dataset: &Dataset, day: u32) -> Result<()> {
        let month = self.current_month(dataset)?;
        if month.day(day).is_none() {
            return Err(SalesDashboardError::DayNotFound {
                year: self.selected_year.clone(),
                month_index: self.selected_month_index,
                day,
            });
        }
        self.selected_day = day;
        Ok(())
    }

    pub fn current_year<'a>(&self, dataset: &'a Dataset) -> Result<&'a YearRecord> {
        dataset
            .get(&self.selected_year)
            .ok_or_else(|| SalesDashboardError::YearNotFound(self.selected_year.clone()))
    }

    pub fn current_month<'a>(&self, dataset: &'a Dataset) -> Result<&'a MonthRecord> {
        self.current_year(dataset)?
            .months
            .get(self.selected_month_index)
            .ok_or(SalesDashboardError::MonthOutOfRange(self.selected_month_index))
    }

    pub fn current_day<'a>(&self, dataset: &'a Dataset) -> Result<&'a DayRecord> {
        self.current_month(dataset)?
            .day(self.selected_day)
            .ok_or_else(|| SalesDashboardError::DayNotFound {
                year: self.selected_year.clone(),
                month_index: self.selected_month_index,
                day: self.selected_day,
            })
    }

    pub fn days_in_selected_month(&self, dataset: &Dataset) -> usize {
        self.current_month(dataset).map_or(0, |m| m.days.len())
    }

    pub fn form_defaults(&self, dataset: &Dataset) -> Result<MonthlyFormDefaults> {
        let month = self.current_month(dataset)?;
        Ok(MonthlyFormDefaults {
            monthly_target: month.target,
            daily_achieved: month
                .day(self.selected_day)
                .map_or(0.0, |d| d.daily_achieved),
        })
    }
}

pub fn available_years(dataset: &Dataset) -> Vec<String> {
    dataset.keys().cloned().collect()
}
