//! # Proximity monitor: parameters and pipeline
//!
//! This module defines [`MonitorParams`] (with its validating builder) and the
//! [`ProximityMonitor`] façade that runs one batch:
//!
//! ```text
//! TrajectorySource ──► Extrapolate ──► CollisionDetector ──► threat_percent / AlertStatus
//!   (synthetic | TLE)   (+future_steps)   (pairs × aligned steps)
//! ```
//!
//! Every stage is a pure function of its inputs. The outcome is returned as a
//! [`MonitorReport`]; nothing is cached between runs, so independent runs can be executed
//! on different threads without coordination.
//!
//! ## Example
//!
//! ```rust
//! use proxorbit::monitor::{MonitorParams, ProximityMonitor};
//!
//! let params = MonitorParams::builder()
//!     .synthetic(4, 30)
//!     .threshold_km(350.0)
//!     .build()
//!     .unwrap();
//!
//! let report = ProximityMonitor::new(params).run().unwrap();
//! assert_eq!(report.trajectories.len(), 4);
//! assert_eq!(report.detection.events.len(), 6);
//! assert_eq!(report.threat_percent, 60);
//! ```
//!
//! ## Insufficient data
//!
//! Fewer than two trajectories is not an error: the detector returns no minimum and no
//! events, the threat is `0` and the status is
//! [`AlertStatus::InsufficientData`].
use std::cmp::Ordering::Greater;
use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    collision::{CollisionDetector, DetectionResult, EventTable},
    constants::{
        Kilometer, DEFAULT_FUTURE_STEPS, DEFAULT_OBJECT_COUNT, DEFAULT_SEED, DEFAULT_THRESHOLD_KM,
    },
    proxorbit_errors::ProxOrbitError,
    threat::{threat_percent, AlertStatus},
    trajectories::{
        extrapolation::Extrapolate, synthetic::SyntheticGenerator, tle_reader::parse_tle,
        TrajectorySet,
    },
};

/// Where the initial trajectories of a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrajectorySource {
    /// Seeded synthetic generator.
    Synthetic { object_count: usize, seed: i64 },
    /// Raw TLE text, any number of 3-line records.
    TleText(String),
}

impl TrajectorySource {
    /// Produce the pre-extrapolation trajectory set.
    pub fn load(&self) -> Result<TrajectorySet, ProxOrbitError> {
        match self {
            TrajectorySource::Synthetic { object_count, seed } => {
                Ok(SyntheticGenerator::new(*object_count, *seed).generate())
            }
            TrajectorySource::TleText(text) => Ok(parse_tle(text)),
        }
    }

    pub fn mode_name(&self) -> &'static str {
        match self {
            TrajectorySource::Synthetic { .. } => "synthetic",
            TrajectorySource::TleText(_) => "tle",
        }
    }
}

impl Default for TrajectorySource {
    fn default() -> Self {
        TrajectorySource::Synthetic {
            object_count: DEFAULT_OBJECT_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

/// Configuration of one monitoring run.
///
/// Fields
/// -----------------
/// * `source` – trajectory source (default: synthetic, 4 objects, seed 42).
/// * `threshold_km` – close-approach threshold, strictly positive and finite (default 350).
/// * `future_steps` – extrapolation horizon in timesteps (default 18).
///
/// Use [`MonitorParams::builder`] to obtain validated values, or
/// [`MonitorConfig::resolve`](crate::config::MonitorConfig::resolve) to start from raw,
/// possibly invalid inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorParams {
    pub source: TrajectorySource,
    pub threshold_km: Kilometer,
    pub future_steps: usize,
}

impl MonitorParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> MonitorParamsBuilder {
        MonitorParamsBuilder::new()
    }
}

impl Default for MonitorParams {
    fn default() -> Self {
        MonitorParams {
            source: TrajectorySource::default(),
            threshold_km: DEFAULT_THRESHOLD_KM,
            future_steps: DEFAULT_FUTURE_STEPS,
        }
    }
}

/// Builder for [`MonitorParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct MonitorParamsBuilder {
    params: MonitorParams,
}

impl MonitorParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: MonitorParams::default(),
        }
    }

    pub fn source(mut self, v: TrajectorySource) -> Self {
        self.params.source = v;
        self
    }
    pub fn synthetic(mut self, object_count: usize, seed: i64) -> Self {
        self.params.source = TrajectorySource::Synthetic { object_count, seed };
        self
    }
    pub fn tle_text(mut self, text: impl Into<String>) -> Self {
        self.params.source = TrajectorySource::TleText(text.into());
        self
    }
    pub fn threshold_km(mut self, v: Kilometer) -> Self {
        self.params.threshold_km = v;
        self
    }
    pub fn future_steps(mut self, v: usize) -> Self {
        self.params.future_steps = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `threshold_km > 0` and finite (NaN is rejected as well).
    ///
    /// `future_steps = 0` is accepted and disables extrapolation.
    pub fn build(self) -> Result<MonitorParams, ProxOrbitError> {
        let p = &self.params;

        if p.threshold_km.partial_cmp(&0.0) != Some(Greater) {
            return Err(ProxOrbitError::InvalidMonitorParameter(
                "threshold_km must be > 0".into(),
            ));
        }
        if !p.threshold_km.is_finite() {
            return Err(ProxOrbitError::InvalidMonitorParameter(
                "threshold_km must be finite".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for MonitorParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            TrajectorySource::Synthetic { object_count, seed } => {
                format!("synthetic(count={object_count}, seed={seed})")
            }
            TrajectorySource::TleText(text) => format!("tle({} bytes)", text.len()),
        };

        if f.alternate() {
            writeln!(f, "Proximity Monitor Parameters")?;
            writeln!(f, "----------------------------")?;
            writeln!(f, "  source       = {source}")?;
            writeln!(f, "  threshold_km = {:.3} km", self.threshold_km)?;
            write!(f, "  future_steps = {}", self.future_steps)
        } else {
            write!(
                f,
                "MonitorParams(source={source}, threshold={:.1}km, future_steps={})",
                self.threshold_km, self.future_steps
            )
        }
    }
}

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorReport {
    /// Post-extrapolation trajectories, in source order.
    pub trajectories: TrajectorySet,
    pub detection: DetectionResult,
    pub threat_percent: u8,
    pub status: AlertStatus,
    pub threshold_km: Kilometer,
}

impl fmt::Display for MonitorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status           : {}", self.status)?;
        if self.status == AlertStatus::InsufficientData {
            return write!(f, "Please provide at least two satellites.");
        }
        writeln!(
            f,
            "Objects          : {} ({} points each)",
            self.trajectories.len(),
            self.trajectories.iter().map(|t| t.len()).max().unwrap_or(0)
        )?;
        writeln!(f, "Threshold        : {:.1} km", self.threshold_km)?;
        writeln!(f, "Closest approach : {}", self.detection.closest_label())?;
        writeln!(f, "Threat           : {}%", self.threat_percent)?;
        let table = EventTable::new(&self.detection.events);
        if f.alternate() {
            write!(f, "{table}")
        } else {
            write!(f, "{}", table.limit(12))
        }
    }
}

/// Runs the monitoring pipeline for a fixed set of parameters.
#[derive(Debug, Clone, Default)]
pub struct ProximityMonitor {
    params: MonitorParams,
}

impl ProximityMonitor {
    pub fn new(params: MonitorParams) -> Self {
        ProximityMonitor { params }
    }

    pub fn params(&self) -> &MonitorParams {
        &self.params
    }

    /// Load trajectories from the configured source, then [`ProximityMonitor::run_on`].
    pub fn run(&self) -> Result<MonitorReport, ProxOrbitError> {
        let initial = self.params.source.load()?;
        info!(
            mode = self.params.source.mode_name(),
            objects = initial.len(),
            "trajectories loaded"
        );
        Ok(self.run_on(&initial))
    }

    /// Extrapolate `initial`, detect close approaches and score the run.
    pub fn run_on(&self, initial: &TrajectorySet) -> MonitorReport {
        if initial.len() < 2 {
            warn!(
                objects = initial.len(),
                "fewer than two trajectories, nothing to compare"
            );
        }

        let trajectories = initial.extrapolated(self.params.future_steps);
        let detection = CollisionDetector::new(self.params.threshold_km).detect(&trajectories);
        let threat = threat_percent(detection.closest_distance_km, self.params.threshold_km);
        let status = AlertStatus::assess(trajectories.len(), &detection);

        info!(status = %status, threat_percent = threat, "run complete");

        MonitorReport {
            trajectories,
            detection,
            threat_percent: threat,
            status,
            threshold_km: self.params.threshold_km,
        }
    }
}

/// One-shot helper: `ProximityMonitor::new(params.clone()).run()`.
pub fn run_monitor(params: &MonitorParams) -> Result<MonitorReport, ProxOrbitError> {
    ProximityMonitor::new(params.clone()).run()
}
