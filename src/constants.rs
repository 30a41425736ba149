//! # Constants and type definitions for proxorbit
//!
//! This module centralizes the **unit conversions**, **type aliases** and the **named
//! defaults** used throughout the crate. Every default that the monitor applies to a
//! missing or invalid input lives here, so the boundary layer
//! ([`config`](crate::config) and the [`MonitorParams`](crate::monitor::MonitorParams)
//! builder) can resolve inputs once and the algorithms can assume well-formed values.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, days ↔ seconds)
//! - Core type aliases (kilometers, radians, timestep indices)
//! - Sampling cadence shared by both trajectory sources
//! - Monitor defaults (object count, seed, threshold, horizon)

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Duration in seconds
pub type Second = f64;
/// Discrete timestep index inside a trajectory
pub type TimeStep = usize;

// -------------------------------------------------------------------------------------------------
// Sampling cadence
// -------------------------------------------------------------------------------------------------

/// Number of points produced by every trajectory source before extrapolation.
///
/// Both sources must agree on this value: the collision detector compares
/// trajectories index by index.
pub const TRAJECTORY_STEPS: usize = 45;

/// Default extrapolation horizon, in timesteps.
pub const DEFAULT_FUTURE_STEPS: usize = 18;

// -------------------------------------------------------------------------------------------------
// Monitor defaults
// -------------------------------------------------------------------------------------------------

/// Number of synthetic objects used when the requested count is missing or invalid.
pub const DEFAULT_OBJECT_COUNT: usize = 4;

/// Seed of the synthetic generator when the requested seed is missing or zero.
pub const DEFAULT_SEED: i64 = 42;

/// Seed of the bare PRNG when it is built without a usable seed.
pub const DEFAULT_PRNG_SEED: u32 = 1;

/// Close-approach threshold used when the requested one is missing, zero or NaN.
pub const DEFAULT_THRESHOLD_KM: Kilometer = 350.0;

/// Separator placed between the two trajectory names of a close-approach pair.
pub const PAIR_SEPARATOR: &str = " ↔ ";
