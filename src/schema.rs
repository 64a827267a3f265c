use crate::error::{Result, SalesDashboardError};
use crate::utils::MONTHS_PER_YEAR;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MonthSource {
    #[serde(rename = "month")]
    #[schemars(description = "Display label of the month (e.g. 'Jan', 'Fev')")]
    pub label: String,

    #[schemars(description = "Planned sales amount for the month. Must be non-negative.")]
    pub target: f64,

    #[schemars(
        description = "Sales amount achieved in the month. Distributed over the elapsed days of the current month; past and future months carry it on their last calendar day."
    )]
    pub achieved: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct YearTotals {
    #[schemars(description = "Annual target. Recomputed from the months when the dataset is built.")]
    pub target: f64,

    #[schemars(description = "Annual achieved amount. Recomputed from the months when the dataset is built.")]
    pub achieved: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct YearSource {
    #[schemars(description = "Exactly 12 entries in calendar order, January first")]
    pub monthly_data: Vec<MonthSource>,

    #[serde(default)]
    pub yearly_data: YearTotals,
}

/// Bootstrap payload: year key ("2025") to that year's monthly figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(transparent)]
pub struct SalesSource {
    pub years: BTreeMap<String, YearSource>,
}

impl SalesSource {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(SalesSource)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }

    pub fn validate(&self) -> Result<()> {
        for (key, year) in &self.years {
            let invalid = |details: String| SalesDashboardError::InvalidSource {
                year: key.clone(),
                details,
            };

            key.trim()
                .parse::<i32>()
                .map_err(|_| invalid(format!("Year key '{}' is not a number", key)))?;

            if year.monthly_data.len() != MONTHS_PER_YEAR {
                return Err(invalid(format!(
                    "Expected {} months, got {}",
                    MONTHS_PER_YEAR,
                    year.monthly_data.len()
                )));
            }

            for (idx, month) in year.monthly_data.iter().enumerate() {
                for (field, value) in [("target", month.target), ("achieved", month.achieved)] {
                    if !value.is_finite() || value < 0.0 {
                        return Err(invalid(format!(
                            "Month #{} ('{}') has invalid {} {}",
                            idx, month.label, field, value
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_with(months: usize, achieved: f64) -> YearSource {
        YearSource {
            monthly_data: (0..months)
                .map(|i| MonthSource {
                    label: format!("M{}", i + 1),
                    target: 1000.0,
                    achieved,
                })
                .collect(),
            yearly_data: YearTotals::default(),
        }
    }

    #[test]
    fn test_schema_generation() {
        let schema_json = SalesSource::schema_as_json().unwrap();
        assert!(schema_json.contains("monthlyData"));
        assert!(schema_json.contains("yearlyData"));
        assert!(schema_json.contains("month"));
    }

    #[test]
    fn test_deserialize_dashboard_payload_shape() {
        let json = r#"{
            "2025": {
                "monthlyData": [
                    { "month": "Jan", "target": 10000, "achieved": 9500 },
                    { "month": "Fev", "target": 11000, "achieved": 10500 }
                ],
                "yearlyData": { "target": 21000, "achieved": 20000 }
            }
        }"#;

        let source: SalesSource = serde_json::from_str(json).unwrap();
        let year = source.years.get("2025").unwrap();
        assert_eq!(year.monthly_data[1].label, "Fev");
        assert_eq!(year.monthly_data[1].achieved, 10500.0);
        assert_eq!(year.yearly_data.target, 21000.0);
    }

    #[test]
    fn test_validate_accepts_complete_year() {
        let mut source = SalesSource::default();
        source.years.insert("2025".to_string(), year_with(12, 500.0));
        assert!(source.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_month_count() {
        let mut source = SalesSource::default();
        source.years.insert("2025".to_string(), year_with(11, 500.0));
        assert!(matches!(
            source.validate(),
            Err(SalesDashboardError::InvalidSource { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_key_and_negative_values() {
        let mut source = SalesSource::default();
        source.years.insert("next".to_string(), year_with(12, 500.0));
        assert!(source.validate().is_err());

        let mut source = SalesSource::default();
        source.years.insert("2025".to_string(), year_with(12, -1.0));
        assert!(source.validate().is_err());
    }
}
