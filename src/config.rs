use crate::error::Result;
use crate::utils::{validate_jitter, validate_status_ttl};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_JITTER: f64 = 0.2;
pub const DEFAULT_STATUS_TTL_SECONDS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Maximum relative deviation applied to each synthesized day (0.2 = ±20%)
    pub jitter: f64,
    /// How long a status message stays visible
    pub status_ttl_seconds: i64,
    /// Fixed seed for the daily series generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            jitter: DEFAULT_JITTER,
            status_ttl_seconds: DEFAULT_STATUS_TTL_SECONDS,
            seed: None,
        }
    }
}

impl DashboardConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_jitter(self.jitter)?;
        validate_status_ttl(self.status_ttl_seconds)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SalesDashboardError;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.jitter, 0.2);
        assert_eq!(config.status_ttl_seconds, 3);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_jitter() {
        let config = DashboardConfig {
            jitter: 1.5,
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_status_ttl() {
        for ttl in [0, -5, 86_401, i64::MAX / 1000 - 1, i64::MAX] {
            let config = DashboardConfig {
                status_ttl_seconds: ttl,
                ..DashboardConfig::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(SalesDashboardError::InvalidStatusTtl(t)) if t == ttl
                ),
                "ttl {} should be rejected",
                ttl
            );
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = DashboardConfig::seeded(7);
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DashboardConfig = serde_json::from_str(r#"{ "seed": 11 }"#).unwrap();
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.jitter, DEFAULT_JITTER);
    }
}
