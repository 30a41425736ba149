//! # proxorbit
//!
//! Batch orbital-proximity monitoring: build satellite trajectories (seeded synthetic
//! orbits or a simplified TLE reading), extrapolate them with per-axis least squares,
//! flag every pair that comes closer than a distance threshold and score the run.
//!
//! ```rust
//! use proxorbit::{MonitorParams, ProximityMonitor};
//!
//! let params = MonitorParams::builder()
//!     .synthetic(4, 42)
//!     .threshold_km(350.0)
//!     .build()
//!     .unwrap();
//! let report = ProximityMonitor::new(params).run().unwrap();
//! println!("{report}");
//! ```
//!
//! Modules
//! -----------------
//! * [`random`] – Mulberry32 seeded generator.
//! * [`trajectories`] – trajectory model, synthetic and TLE sources, extrapolation.
//! * [`collision`] – pairwise close-approach detection and its presentation.
//! * [`threat`] – threat score and alert status.
//! * [`monitor`] – parameters and the end-to-end pipeline.
//! * [`config`] – TOML configuration and defaulting rules.
pub mod collision;
pub mod config;
pub mod constants;
pub mod monitor;
pub mod proxorbit_errors;
pub mod random;
pub mod threat;
pub mod trajectories;

pub use collision::{detect_collisions, CloseApproachEvent, CollisionDetector, DetectionResult};
pub use config::{MonitorConfig, SourceMode};
pub use monitor::{run_monitor, MonitorParams, MonitorReport, ProximityMonitor, TrajectorySource};
pub use proxorbit_errors::ProxOrbitError;
pub use random::Mulberry32;
pub use threat::{threat_percent, AlertStatus};
pub use trajectories::{
    extrapolation::{extrapolate, Extrapolate},
    synthetic::SyntheticGenerator,
    tle_reader::parse_tle,
    Point, Trajectory, TrajectorySet,
};
