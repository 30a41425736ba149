//! # Simplified Two-Line Element reader
//!
//! Turns textual TLE records into [`Trajectory`]s. This is **not** an SGP4 propagator:
//! only three fields of line 2 are read, and the orbit is approximated by the same
//! tilted circle as the synthetic source.
//!
//! ## Record layout
//! -----------------
//! Input text is split into lines, each line is trimmed and empty lines are dropped.
//! The remaining lines are consumed in groups of three:
//!
//! ```text
//! ISS (ZARYA)                                                            <- name
//! 1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927  <- ignored
//! 2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537  <- data
//! ```
//!
//! A trailing group with fewer than three lines is dropped, and fewer than three lines
//! overall yields an empty set.
//!
//! ## Fields read from line 2
//! -----------------
//! Line 2 is split on whitespace and read by **field index**:
//!
//! | index | meaning                | default |
//! |-------|------------------------|---------|
//! | 2     | inclination (deg)      | 0       |
//! | 5     | phase (deg)            | 0       |
//! | 7     | mean motion (rev/day)  | 15      |
//!
//! A field that is missing, non-numeric, non-finite or exactly zero resolves to its
//! default. Parsing never fails.
//!
//! Field 5 of a standard TLE is the argument of perigee. It is only used as the starting
//! angle of the circle, not as an orbital element.
//!
//! ## Repeated names
//! -----------------
//! Names must be unique inside a [`TrajectorySet`]. A record whose name line was already
//! seen is renamed with a counter suffix: `DEB`, `DEB #2`, `DEB #3`, …
//!
//! ## Derived orbit
//! -----------------
//! * `period = 86400 / mean_motion` seconds
//! * `radius = 6771 + 800` km when `mean_motion < 15`, else `6771 + 450` km
//!   (a coarse LEO altitude heuristic, not a semi-major axis)
//! * `step = period / 45`, `θ(t) = phase + (2π / period)·(t·step)`
//!
//! ## See also
//! ------------
//! * [`TiltedCircularOrbit`] – Shared position model.
//! * [`SyntheticGenerator`](crate::trajectories::synthetic::SyntheticGenerator) – The other source.
use std::collections::HashSet;

use ahash::RandomState;
use camino::Utf8Path;
use tracing::{debug, info, warn};

use crate::{
    constants::{Degree, Kilometer, Second, DPI, RADEG, SECONDS_PER_DAY, TRAJECTORY_STEPS},
    proxorbit_errors::ProxOrbitError,
};

use super::{circular_orbit::TiltedCircularOrbit, Trajectory, TrajectorySet};

const INCLINATION_FIELD: usize = 2;
const PHASE_FIELD: usize = 5;
const MEAN_MOTION_FIELD: usize = 7;

/// Mean motion (rev/day) used when line 2 does not carry a usable one.
pub const DEFAULT_MEAN_MOTION: f64 = 15.0;

const BASE_RADIUS_KM: Kilometer = 6771.0;
const SLOW_ORBIT_ALTITUDE_KM: Kilometer = 800.0;
const FAST_ORBIT_ALTITUDE_KM: Kilometer = 450.0;

/// The subset of a TLE record used by the monitor.
#[derive(Debug, Clone, PartialEq)]
pub struct TleRecord {
    pub name: String,
    pub inclination: Degree,
    /// Starting angle of the orbit (field 5 of line 2)
    pub phase: Degree,
    /// Revolutions per day
    pub mean_motion: f64,
}

impl TleRecord {
    /// Extract a record from its name line and its data line (line 2).
    pub fn from_lines(name: &str, data_line: &str) -> Self {
        let fields: Vec<&str> = data_line.split_whitespace().collect();
        TleRecord {
            name: name.to_string(),
            inclination: field_or(&fields, INCLINATION_FIELD, 0.0),
            phase: field_or(&fields, PHASE_FIELD, 0.0),
            mean_motion: field_or(&fields, MEAN_MOTION_FIELD, DEFAULT_MEAN_MOTION),
        }
    }

    pub fn orbital_period(&self) -> Second {
        SECONDS_PER_DAY / self.mean_motion
    }

    pub fn radius(&self) -> Kilometer {
        if self.mean_motion < DEFAULT_MEAN_MOTION {
            BASE_RADIUS_KM + SLOW_ORBIT_ALTITUDE_KM
        } else {
            BASE_RADIUS_KM + FAST_ORBIT_ALTITUDE_KM
        }
    }

    /// Sample the approximate orbit over one period at [`TRAJECTORY_STEPS`] points.
    pub fn to_trajectory(&self) -> Trajectory {
        let period = self.orbital_period();
        let step = period / TRAJECTORY_STEPS as f64;
        let phase = self.phase * RADEG;
        let orbit = TiltedCircularOrbit::new(self.radius(), self.inclination * RADEG);

        let points = orbit.sample(TRAJECTORY_STEPS, |t| {
            phase + (DPI / period) * (t as f64 * step)
        });
        Trajectory::new(self.name.clone(), points)
    }
}

/// Read field `index` as a number, falling back to `default` when it is missing,
/// unparsable, non-finite or zero.
fn field_or(fields: &[&str], index: usize, default: f64) -> f64 {
    fields
        .get(index)
        .and_then(|field| field.parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value != 0.0)
        .unwrap_or(default)
}

/// Parse every complete 3-line record of `text`.
pub fn parse_tle_records(text: &str) -> Vec<TleRecord> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 3 {
        debug!(lines = lines.len(), "not enough lines for a TLE record");
        return Vec::new();
    }

    lines
        .chunks_exact(3)
        .map(|record| TleRecord::from_lines(record[0], record[2]))
        .collect()
}

/// Return `name` if unused, else the first free `"{name} #k"` with `k ≥ 2`.
fn unique_name(name: &str, seen: &mut HashSet<String, RandomState>) -> String {
    if seen.insert(name.to_string()) {
        return name.to_string();
    }
    let mut k = 2usize;
    loop {
        let candidate = format!("{name} #{k}");
        if seen.insert(candidate.clone()) {
            warn!(original = name, renamed = %candidate, "repeated TLE name");
            return candidate;
        }
        k += 1;
    }
}

/// Parse TLE text into a trajectory set, in record order.
///
/// Never fails: repeated names are made unique (see the module docs).
pub fn parse_tle(text: &str) -> TrajectorySet {
    let mut seen = HashSet::with_hasher(RandomState::new());
    let trajectories = parse_tle_records(text)
        .iter()
        .map(|record| {
            let mut trajectory = record.to_trajectory();
            trajectory.name = unique_name(&record.name, &mut seen);
            trajectory
        })
        .collect();
    TrajectorySet::from_distinct(trajectories)
}

/// Read a TLE file and parse it with [`parse_tle`].
pub fn read_tle_file(path: &Utf8Path) -> Result<TrajectorySet, ProxOrbitError> {
    let text = std::fs::read_to_string(path)?;
    let set = parse_tle(&text);
    info!(path = %path, objects = set.len(), "TLE file loaded");
    Ok(set)
}
