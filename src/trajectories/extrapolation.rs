//! # Short-horizon extrapolation
//!
//! Extends trajectories forward in time by fitting an **ordinary least-squares line**
//! independently on each axis (`x(t)`, `y(t)`, `z(t)`) and evaluating the three lines at
//! the next timesteps.
//!
//! ## Fit
//! -----------------
//! Closed-form normal equations over all `(t, value)` samples:
//!
//! ```text
//! slope     = (n·Σxy − Σx·Σy) / (n·Σxx − (Σx)²)
//! intercept = (Σy − slope·Σx) / n
//! ```
//!
//! When the denominator is exactly zero (a single sample, or all samples at the same
//! `t`) it is replaced by `1`. With one sample this yields `slope = 0` and a constant
//! extrapolation.
//!
//! ## Output
//! -----------------
//! The input points are copied unchanged and `future_steps` new points are appended at
//! timesteps `last.t + 1, last.t + 2, …`. An empty trajectory stays empty: there is
//! nothing to fit.
//!
//! ## Notes
//! -----------------
//! A straight line through one arc of a circular orbit drifts away from the orbit
//! quickly; this is a short-horizon trend, not a propagation.
use tracing::{debug, warn};

use crate::constants::TimeStep;

use super::{Point, Trajectory, TrajectorySet};

/// A fitted line `value(t) = slope·t + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Least-squares fit over `(t, value)` samples.
    ///
    /// Return
    /// ----------
    /// * `None` when `samples` is empty, the fitted line otherwise.
    pub fn least_squares<I>(samples: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut n = 0usize;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
        for (x, y) in samples {
            n += 1;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        if n == 0 {
            return None;
        }

        let n = n as f64;
        let mut denominator = n * sum_xx - sum_x * sum_x;
        if denominator == 0.0 {
            denominator = 1.0;
        }
        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        Some(LinearFit { slope, intercept })
    }

    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        self.slope * t + self.intercept
    }
}

/// The three per-axis fits of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFits {
    pub x: LinearFit,
    pub y: LinearFit,
    pub z: LinearFit,
}

impl AxisFits {
    pub fn fit(points: &[Point]) -> Option<Self> {
        let axis = |select: fn(&Point) -> f64| {
            LinearFit::least_squares(points.iter().map(|p| (p.t as f64, select(p))))
        };
        Some(AxisFits {
            x: axis(Point::x)?,
            y: axis(Point::y)?,
            z: axis(Point::z)?,
        })
    }

    pub fn point_at(&self, t: TimeStep) -> Point {
        let tf = t as f64;
        Point::new(t, self.x.at(tf), self.y.at(tf), self.z.at(tf))
    }
}

/// Copy `points` and append `future_steps` extrapolated points.
///
/// Arguments
/// -----------------
/// * `points`: the observed part of a trajectory, in time order.
/// * `future_steps`: number of points to append.
///
/// Return
/// ----------
/// * A new vector of length `points.len() + future_steps`, or an empty vector when
///   `points` is empty.
pub fn extrapolate(points: &[Point], future_steps: usize) -> Vec<Point> {
    let (Some(fits), Some(last)) = (AxisFits::fit(points), points.last()) else {
        return Vec::new();
    };

    let mut extended = Vec::with_capacity(points.len() + future_steps);
    extended.extend_from_slice(points);
    extended.extend((1..=future_steps).map(|step| fits.point_at(last.t + step)));
    extended
}

/// Types that can produce an extrapolated copy of themselves.
pub trait Extrapolate {
    fn extrapolated(&self, future_steps: usize) -> Self;
}

impl Extrapolate for Trajectory {
    fn extrapolated(&self, future_steps: usize) -> Self {
        if self.is_empty() {
            warn!(name = %self.name, "empty trajectory left unextrapolated");
        }
        Trajectory::new(self.name.clone(), extrapolate(&self.points, future_steps))
    }
}

impl Extrapolate for TrajectorySet {
    fn extrapolated(&self, future_steps: usize) -> Self {
        debug!(
            trajectories = self.len(),
            future_steps, "extrapolating trajectory set"
        );
        self.map_trajectories(|trajectory| trajectory.extrapolated(future_steps))
    }
}
