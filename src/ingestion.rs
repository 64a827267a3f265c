use crate::error::Result;
use crate::schema::SalesSource;
use log::debug;
use std::fs;
use std::path::Path;

const BUILTIN_SALES_DATA: &str = include_str!("../data/sales_data.json");

/// The 2024–2026 figures the dashboard ships with.
pub fn builtin_source() -> Result<SalesSource> {
    source_from_json(BUILTIN_SALES_DATA)
}

pub fn source_from_json(json: &str) -> Result<SalesSource> {
    let source: SalesSource = serde_json::from_str(json)?;
    source.validate()?;
    debug!("Parsed sales source with {} years", source.years.len());
    Ok(source)
}

pub fn load_source(path: impl AsRef<Path>) -> Result<SalesSource> {
    let path = path.as_ref();
    debug!("Loading sales source from {}", path.display());
    let json = fs::read_to_string(path)?;
    source_from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SalesDashboardError;

    #[test]
    fn test_builtin_source() {
        let source = builtin_source().unwrap();
        let keys: Vec<&String> = source.years.keys().collect();
        assert_eq!(keys, vec!["2024", "2025", "2026"]);

        let y2025 = &source.years["2025"];
        assert_eq!(y2025.monthly_data.len(), 12);
        assert_eq!(y2025.monthly_data[6].label, "Jul");
        assert_eq!(y2025.monthly_data[6].achieved, 2300.0);
        assert_eq!(y2025.yearly_data.target, 151000.0);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            source_from_json("{ not json"),
            Err(SalesDashboardError::SerializationError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_source("/definitely/not/here.json"),
            Err(SalesDashboardError::IoError(_))
        ));
    }
}
