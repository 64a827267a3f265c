use crate::error::{Result, SalesDashboardError};
use crate::utils::validate_status_ttl;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    pub expires_at: DateTime<Utc>,
}

/// Holds at most one transient message. Posting replaces whatever is showing
/// and restarts the expiry window.
#[derive(Debug, Clone)]
pub struct StatusBoard {
    ttl: Duration,
    message: Option<StatusMessage>,
}

impl StatusBoard {
    /// `ttl_seconds` must lie in `1..=MAX_STATUS_TTL_SECONDS`.
    pub fn new(ttl_seconds: i64) -> Result<Self> {
        validate_status_ttl(ttl_seconds)?;
        let ttl = Duration::try_seconds(ttl_seconds)
            .ok_or(SalesDashboardError::InvalidStatusTtl(ttl_seconds))?;

        Ok(Self { ttl, message: None })
    }

    pub fn post(&mut self, kind: StatusKind, text: impl Into<String>, now: DateTime<Utc>) {
        self.message = Some(StatusMessage {
            kind,
            text: text.into(),
            // Saturates at the end of representable time
            expires_at: now
                .checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        });
    }

    pub fn current(&self, now: DateTime<Utc>) -> Option<&StatusMessage> {
        self.message.as_ref().filter(|m| now < m.expires_at)
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}
