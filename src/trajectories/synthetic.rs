//! # Seeded synthetic trajectory source
//!
//! Generates `count` objects on tilted circular orbits, drawing every orbital parameter
//! from a [`Mulberry32`] stream. Two generators built with the same `(count, seed)` produce
//! identical [`TrajectorySet`]s.
//!
//! Per object, four values are drawn **in this order**:
//!
//! | draw | parameter       | range                 |
//! |------|-----------------|-----------------------|
//! | 1    | radius          | `[6650, 7500)` km     |
//! | 2    | angular speed   | `[0.035, 0.065)` rad/step |
//! | 3    | phase           | `[0, 2π)` rad         |
//! | 4    | inclination     | `[-0.175, 0.175)` rad |
//!
//! Each object is then sampled at [`TRAJECTORY_STEPS`] timesteps with
//! `θ(t) = phase + t·angular_speed` and named `SIM-1`, `SIM-2`, …
use tracing::debug;

use crate::{
    constants::{Kilometer, Radian, DPI, TRAJECTORY_STEPS},
    random::Mulberry32,
};

use super::{circular_orbit::TiltedCircularOrbit, Trajectory, TrajectorySet};

const RADIUS_MIN_KM: Kilometer = 6650.0;
const RADIUS_SPAN_KM: Kilometer = 850.0;
const ANGULAR_SPEED_MIN: Radian = 0.035;
const ANGULAR_SPEED_SPAN: Radian = 0.03;
const INCLINATION_SPAN: Radian = 0.35;

/// Orbital parameters drawn for one synthetic object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticOrbit {
    pub radius: Kilometer,
    pub angular_speed: Radian,
    pub phase: Radian,
    pub inclination: Radian,
}

impl SyntheticOrbit {
    /// Draw the four parameters from `rng`, consuming exactly four values.
    pub fn draw(rng: &mut Mulberry32) -> Self {
        let radius = RADIUS_MIN_KM + rng.next_f64() * RADIUS_SPAN_KM;
        let angular_speed = ANGULAR_SPEED_MIN + rng.next_f64() * ANGULAR_SPEED_SPAN;
        let phase = rng.next_f64() * DPI;
        let inclination = (rng.next_f64() - 0.5) * INCLINATION_SPAN;
        SyntheticOrbit {
            radius,
            angular_speed,
            phase,
            inclination,
        }
    }

    pub fn to_trajectory(&self, name: impl Into<String>) -> Trajectory {
        let orbit = TiltedCircularOrbit::new(self.radius, self.inclination);
        let points = orbit.sample(TRAJECTORY_STEPS, |t| {
            self.phase + t as f64 * self.angular_speed
        });
        Trajectory::new(name, points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticGenerator {
    count: usize,
    seed: i64,
}

impl SyntheticGenerator {
    /// Arguments
    /// -----------------
    /// * `count`: number of objects; `0` yields an empty set.
    /// * `seed`: PRNG seed, see [`Mulberry32::from_seed_value`].
    pub fn new(count: usize, seed: i64) -> Self {
        SyntheticGenerator { count, seed }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Generate the trajectory set.
    pub fn generate(&self) -> TrajectorySet {
        let mut rng = Mulberry32::from_seed_value(self.seed);

        let trajectories = (0..self.count)
            .map(|i| {
                let orbit = SyntheticOrbit::draw(&mut rng);
                let name = format!("SIM-{}", i + 1);
                debug!(
                    name = %name,
                    radius_km = orbit.radius,
                    angular_speed = orbit.angular_speed,
                    "synthetic orbit drawn"
                );
                orbit.to_trajectory(name)
            })
            .collect();

        // SIM-n names are distinct by construction
        TrajectorySet::from_distinct(trajectories)
    }
}
