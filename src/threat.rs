//! # Threat scoring
//!
//! Maps the closest approach of a run and the configured threshold to a bounded
//! `0..=100` score, and derives the dashboard alert status.
//!
//! ```text
//! ratio   = max(0, (threshold − closest) / threshold)
//! boosted = min(1, 1.3 · ratio)
//! score   = round(100 · boosted)
//! ```
//!
//! * `closest ≥ threshold` → `0`
//! * `closest ≤ threshold · (1 − 1/1.3)` (≈ 23.1 % of the threshold) → `100`
//! * linear in between, amplified by [`THREAT_GAIN`] so moderate intrusions into the
//!   safety margin register more strongly than a plain linear mapping.
//!
//! A run without any minimum distance scores `0`.
use std::fmt;

use serde::Serialize;

use crate::{collision::DetectionResult, constants::Kilometer};

/// Amplification applied to the intrusion ratio.
pub const THREAT_GAIN: f64 = 1.3;

/// Threat score in percent.
pub fn threat_percent(closest_km: Option<Kilometer>, threshold_km: Kilometer) -> u8 {
    let Some(closest) = closest_km else {
        return 0;
    };
    let ratio = ((threshold_km - closest) / threshold_km).max(0.0);
    let boosted = (ratio * THREAT_GAIN).min(1.0);
    (boosted * 100.0).round() as u8
}

/// Overall state of a monitoring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    /// Two or more trajectories, no close approach.
    Safe,
    /// At least one close approach below the threshold.
    RedAlert,
    /// Fewer than two trajectories: nothing could be compared.
    InsufficientData,
}

impl AlertStatus {
    pub fn assess(trajectory_count: usize, detection: &DetectionResult) -> Self {
        if trajectory_count < 2 {
            AlertStatus::InsufficientData
        } else if detection.has_events() {
            AlertStatus::RedAlert
        } else {
            AlertStatus::Safe
        }
    }

    pub fn is_danger(&self) -> bool {
        matches!(self, AlertStatus::RedAlert)
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertStatus::Safe => write!(f, "SAFE"),
            AlertStatus::RedAlert => write!(f, "RED ALERT"),
            AlertStatus::InsufficientData => write!(f, "INSUFFICIENT DATA"),
        }
    }
}
