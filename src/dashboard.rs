use crate::config::DashboardConfig;
use crate::edits::{update_annual, update_monthly_and_daily, AnnualEdit, MonthlyEdit};
use crate::error::Result;
use crate::model::{Dataset, DayRecord, MonthRecord, YearRecord};
use crate::schema::SalesSource;
use crate::series::{
    build_cumulative, daily_series, gauge, monthly_series, progress, CumulativePoint, DailyPoint,
    GaugeSegments, MonthlyPoint, Progress,
};
use crate::status::{StatusBoard, StatusKind, StatusMessage};
use crate::view::{available_years, MonthlyFormDefaults, ViewState};
use crate::build_dataset;
use chrono::{DateTime, NaiveDate, Utc};
use log::{info, warn};

pub const MONTHLY_UPDATE_MESSAGE: &str = "Metas mensais e diárias atualizadas com sucesso!";
pub const ANNUAL_UPDATE_MESSAGE: &str = "Metas anuais atualizadas com sucesso!";

/// Owns the current dataset snapshot, the selection and the status line.
///
/// Every user action goes through here. Failures never escape: the snapshot
/// stays as it was and the error is shown as a transient status message.
pub struct SalesDashboard {
    dataset: Dataset,
    view: ViewState,
    status: StatusBoard,
    today: NaiveDate,
}

impl SalesDashboard {
    pub fn new(source: SalesSource, config: DashboardConfig, today: NaiveDate) -> Result<Self> {
        let dataset = build_dataset(&source, &config, today)?;
        Self::from_dataset(dataset, &config, today)
    }

    pub fn from_dataset(
        dataset: Dataset,
        config: &DashboardConfig,
        today: NaiveDate,
    ) -> Result<Self> {
        config.validate()?;
        let status = StatusBoard::new(config.status_ttl_seconds)?;
        let view = ViewState::initial(&dataset, today)?;
        info!(
            "Dashboard ready with years {:?}, showing {}",
            available_years(&dataset),
            view.selected_year
        );

        Ok(Self {
            dataset,
            view,
            status,
            today,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn status(&self, now: DateTime<Utc>) -> Option<&StatusMessage> {
        self.status.current(now)
    }

    pub fn years(&self) -> Vec<String> {
        available_years(&self.dataset)
    }

    pub fn select_year(&mut self, year: &str, now: DateTime<Utc>) -> bool {
        let result = self.view.select_year(&self.dataset, year, self.today);
        self.report_failure(result, now)
    }

    pub fn select_month(&mut self, month_index: usize, now: DateTime<Utc>) -> bool {
        let result = self.view.select_month(&self.dataset, month_index);
        self.report_failure(result, now)
    }

    pub fn select_day(&mut self, day: u32, now: DateTime<Utc>) -> bool {
        let result = self.view.select_day(&self.dataset, day);
        self.report_failure(result, now)
    }

    /// Applies the monthly form to the selected month and day. Returns whether
    /// the dataset changed.
    pub fn submit_monthly_edit(
        &mut self,
        new_monthly_target: &str,
        new_daily_achieved: &str,
        now: DateTime<Utc>,
    ) -> bool {
        let edit = MonthlyEdit {
            year: self.view.selected_year.clone(),
            month_index: self.view.selected_month_index,
            day: self.view.selected_day,
            new_monthly_target: new_monthly_target.to_string(),
            new_daily_achieved: new_daily_achieved.to_string(),
        };

        let result = update_monthly_and_daily(&self.dataset, &edit);
        self.commit(result, MONTHLY_UPDATE_MESSAGE, now)
    }

    /// Applies the annual form to the selected year. Returns whether the dataset changed.
    pub fn submit_annual_edit(
        &mut self,
        new_target: &str,
        new_achieved: &str,
        now: DateTime<Utc>,
    ) -> bool {
        let edit = AnnualEdit {
            year: self.view.selected_year.clone(),
            new_target: new_target.to_string(),
            new_achieved: new_achieved.to_string(),
        };

        let result = update_annual(&self.dataset, &edit);
        self.commit(result, ANNUAL_UPDATE_MESSAGE, now)
    }

    pub fn current_year(&self) -> Result<&YearRecord> {
        self.view.current_year(&self.dataset)
    }

    pub fn current_month(&self) -> Result<&MonthRecord> {
        self.view.current_month(&self.dataset)
    }

    pub fn current_day(&self) -> Result<&DayRecord> {
        self.view.current_day(&self.dataset)
    }

    pub fn form_defaults(&self) -> Result<MonthlyFormDefaults> {
        self.view.form_defaults(&self.dataset)
    }

    pub fn days_in_selected_month(&self) -> usize {
        self.view.days_in_selected_month(&self.dataset)
    }

    pub fn monthly_progress(&self) -> Result<Progress> {
        let month = self.current_month()?;
        Ok(progress(month.achieved, month.target))
    }

    pub fn annual_progress(&self) -> Result<Progress> {
        let year = self.current_year()?;
        Ok(progress(year.achieved, year.target))
    }

    pub fn monthly_gauge(&self) -> Result<GaugeSegments> {
        let month = self.current_month()?;
        Ok(gauge(month.achieved, month.target))
    }

    pub fn annual_gauge(&self) -> Result<GaugeSegments> {
        let year = self.current_year()?;
        Ok(gauge(year.achieved, year.target))
    }

    pub fn daily_chart(&self) -> Result<Vec<DailyPoint>> {
        Ok(daily_series(self.current_month()?))
    }

    pub fn monthly_chart(&self) -> Result<Vec<MonthlyPoint>> {
        Ok(monthly_series(&self.current_year()?.months))
    }

    pub fn cumulative_chart(&self) -> Result<Vec<CumulativePoint>> {
        Ok(build_cumulative(&self.current_year()?.months))
    }

    fn commit(&mut self, result: Result<Dataset>, success: &str, now: DateTime<Utc>) -> bool {
        match result {
            Ok(dataset) => {
                self.dataset = dataset;
                self.status.post(StatusKind::Success, success, now);
                true
            }
            Err(e) => {
                warn!("Edit rejected: {}", e);
                self.status.post(StatusKind::Error, e.to_string(), now);
                false
            }
        }
    }

    fn report_failure(&mut self, result: Result<()>, now: DateTime<Utc>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("Selection rejected: {}", e);
                self.status.post(StatusKind::Error, e.to_string(), now);
                false
            }
        }
    }
}
