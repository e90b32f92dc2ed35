//! Ledger and risk configuration structures.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::allocation::cashflow::Earnings;

const DEFAULT_BLOCK_SIZE_SECS: u32 = 86_400;
const DEFAULT_AVAILABILITY_SEARCH_DAYS: i64 = 30;
const DEFAULT_REPLACEMENT_SUGGESTION_DAYS: i64 = 15;
const DEFAULT_RISK_THRESHOLD: i64 = 1000;

/// Availability-ledger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Block granularity in seconds; one ledger row covers one block.
    pub block_size_secs: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            block_size_secs: DEFAULT_BLOCK_SIZE_SECS,
        }
    }
}

impl LedgerConfig {
    /// Block granularity as a duration.
    #[must_use]
    pub fn block_size(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.block_size_secs))
    }

    /// Validate ledger configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.block_size_secs == 0 {
            return Err("block_size_secs must be greater than 0".into());
        }
        Ok(())
    }
}

/// Risk-check tunables: deadline windows and the earnings threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Days before the deadline inside which available candidates are
    /// searched for.
    pub upcoming_deadline_availability_search_days: i64,
    /// Days before the deadline inside which a replacement is suggested for
    /// valuable projects.
    pub upcoming_deadline_replacement_suggestion_days: i64,
    /// Earnings above which a project counts as valuable, in currency units.
    pub risk_threshold_earnings: i64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            upcoming_deadline_availability_search_days: DEFAULT_AVAILABILITY_SEARCH_DAYS,
            upcoming_deadline_replacement_suggestion_days: DEFAULT_REPLACEMENT_SUGGESTION_DAYS,
            risk_threshold_earnings: DEFAULT_RISK_THRESHOLD,
        }
    }
}

impl RiskConfig {
    /// The earnings threshold as a value object.
    #[must_use]
    pub const fn risk_threshold(&self) -> Earnings {
        Earnings::of(self.risk_threshold_earnings)
    }

    /// Validate risk configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.upcoming_deadline_availability_search_days <= 0 {
            return Err("upcoming_deadline_availability_search_days must be positive".into());
        }
        if self.upcoming_deadline_replacement_suggestion_days <= 0 {
            return Err("upcoming_deadline_replacement_suggestion_days must be positive".into());
        }
        if self.upcoming_deadline_replacement_suggestion_days
            > self.upcoming_deadline_availability_search_days
        {
            return Err(
                "replacement suggestion window must lie inside the availability search window"
                    .into(),
            );
        }
        Ok(())
    }
}

/// Root engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Availability-ledger settings.
    #[serde(default)]
    pub ledger: LedgerConfig,
    /// Risk-check settings.
    #[serde(default)]
    pub risk: RiskConfig,
}

impl EngineConfig {
    /// Validate all sections.
    pub fn validate(&self) -> Result<(), String> {
        self.ledger
            .validate()
            .map_err(|e| format!("ledger config invalid: {e}"))?;
        self.risk
            .validate()
            .map_err(|e| format!("risk config invalid: {e}"))?;
        Ok(())
    }

    /// Parse engine configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from environment variables (`.env` honored via
    /// dotenvy), falling back to defaults for unset values.
    ///
    /// Recognized variables: `SLOT_LEDGER_BLOCK_SECS`,
    /// `SLOT_LEDGER_RISK_SEARCH_DAYS`, `SLOT_LEDGER_RISK_SUGGESTION_DAYS`,
    /// `SLOT_LEDGER_RISK_THRESHOLD`.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        let mut cfg = Self::default();
        if let Some(value) = read_env("SLOT_LEDGER_BLOCK_SECS")? {
            cfg.ledger.block_size_secs = value;
        }
        if let Some(value) = read_env("SLOT_LEDGER_RISK_SEARCH_DAYS")? {
            cfg.risk.upcoming_deadline_availability_search_days = value;
        }
        if let Some(value) = read_env("SLOT_LEDGER_RISK_SUGGESTION_DAYS")? {
            cfg.risk.upcoming_deadline_replacement_suggestion_days = value;
        }
        if let Some(value) = read_env("SLOT_LEDGER_RISK_THRESHOLD")? {
            cfg.risk.risk_threshold_earnings = value;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn read_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>, String> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| format!("{name} has an invalid value: {raw}")),
        Err(_) => Ok(None),
    }
}
