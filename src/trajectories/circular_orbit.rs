//! Tilted circular-orbit parametrization.
//!
//! Both trajectory sources place an object on a circle of radius `r` whose plane is
//! tilted by an inclination `i` around the x axis:
//!
//! ```text
//! x = r·cos(θ)
//! y = r·sin(θ)·cos(i)
//! z = r·sin(θ)·sin(i)
//! ```
//!
//! This is a coarse approximation: no eccentricity, no node, no perturbations.
use crate::constants::{Kilometer, Radian, TimeStep};

use super::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltedCircularOrbit {
    pub radius: Kilometer,
    pub inclination: Radian,
}

impl TiltedCircularOrbit {
    pub fn new(radius: Kilometer, inclination: Radian) -> Self {
        TiltedCircularOrbit {
            radius,
            inclination,
        }
    }

    /// Position on the orbit at angle `angle`, tagged with timestep `t`.
    #[inline]
    pub fn point_at(&self, t: TimeStep, angle: Radian) -> Point {
        let (sin_a, cos_a) = angle.sin_cos();
        Point::new(
            t,
            self.radius * cos_a,
            self.radius * sin_a * self.inclination.cos(),
            self.radius * sin_a * self.inclination.sin(),
        )
    }

    /// Sample `steps` points, `angle_at(t)` giving the orbital angle at each timestep.
    pub fn sample<F>(&self, steps: usize, angle_at: F) -> Vec<Point>
    where
        F: Fn(TimeStep) -> Radian,
    {
        (0..steps).map(|t| self.point_at(t, angle_at(t))).collect()
    }
}

#[cfg(test)]
mod circular_orbit_test {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_points_stay_on_sphere() {
        let orbit = TiltedCircularOrbit::new(7000.0, 0.3);
        for p in orbit.sample(45, |t| 0.1 * t as f64) {
            assert_abs_diff_eq!(p.position.norm(), 7000.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_equatorial_orbit_has_no_z() {
        let orbit = TiltedCircularOrbit::new(6800.0, 0.0);
        let p = orbit.point_at(3, std::f64::consts::FRAC_PI_2);
        assert_eq!(p.t, 3);
        assert_abs_diff_eq!(p.x(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y(), 6800.0, epsilon = 1e-9);
        assert_eq!(p.z(), 0.0);
    }
}
