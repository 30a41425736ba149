//! # Trajectories: data model and sources
//!
//! The central type is [`TrajectorySet`], an **ordered** collection of named
//! [`Trajectory`] values with a fast name index. Both trajectory sources fill a set,
//! the extrapolator appends to every member, and the collision detector scans it pair
//! by pair.
//!
//! Modules
//! -----------------
//! * [`circular_orbit`](crate::trajectories::circular_orbit) – Tilted circular-orbit
//!   parametrization shared by both sources.
//! * [`synthetic`](crate::trajectories::synthetic) – Seeded synthetic generator.
//! * [`tle_reader`](crate::trajectories::tle_reader) – Simplified two-line-element parser.
//! * [`extrapolation`](crate::trajectories::extrapolation) – Per-axis least-squares extrapolation.
//!
//! Data Model
//! -----------------
//! * **[`Point`]** – timestep index `t` and a position in **km** (`nalgebra::Vector3`).
//! * **[`Trajectory`]** – a unique name and its time-ordered points.
//! * **[`TrajectorySet`]** – insertion-ordered `Vec<Trajectory>` plus a
//!   `HashMap<String, usize, ahash::RandomState>` from name to position.
//!
//! Alignment
//! -----------------
//! Trajectories are compared **by array position**: `points[k]` of one trajectory is
//! paired with `points[k]` of another. Both sources sample
//! [`TRAJECTORY_STEPS`](crate::constants::TRAJECTORY_STEPS) points at the same nominal
//! cadence, which is what makes this comparison meaningful.
use std::collections::HashMap;
use std::ops::Index;

use ahash::RandomState;
use itertools::Itertools;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize, Serializer};

use crate::{
    constants::{Kilometer, TimeStep},
    proxorbit_errors::ProxOrbitError,
};

pub mod circular_orbit;
pub mod extrapolation;
pub mod synthetic;
pub mod tle_reader;

/// A single sample of a trajectory.
///
/// Fields
/// -----------------
/// * `t` – timestep index inside the trajectory.
/// * `position` – cartesian position in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub t: TimeStep,
    pub position: Vector3<Kilometer>,
}

impl Point {
    pub fn new(t: TimeStep, x: Kilometer, y: Kilometer, z: Kilometer) -> Self {
        Point {
            t,
            position: Vector3::new(x, y, z),
        }
    }

    #[inline]
    pub fn x(&self) -> Kilometer {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> Kilometer {
        self.position.y
    }

    #[inline]
    pub fn z(&self) -> Kilometer {
        self.position.z
    }

    /// Euclidean distance to another point, in kilometers.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> Kilometer {
        (self.position - other.position).norm()
    }
}

/// A named, time-ordered sequence of [`Point`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub name: String,
    pub points: Vec<Point>,
}

impl Trajectory {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Trajectory {
            name: name.into(),
            points,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Timestep of the last point, if any.
    pub fn last_step(&self) -> Option<TimeStep> {
        self.points.last().map(|p| p.t)
    }

    /// Point at array position `index` (not at timestep value `index`).
    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }
}

/// An ordered set of uniquely named trajectories.
///
/// Insertion order is preserved and significant: the collision detector scans pairs
/// `(i, j)` with `i < j` in this order. Name lookups go through an `ahash` index.
#[derive(Debug, Clone, Default)]
pub struct TrajectorySet {
    trajectories: Vec<Trajectory>,
    index: HashMap<String, usize, RandomState>,
}

impl TrajectorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from trajectories, rejecting duplicate names.
    ///
    /// Arguments
    /// -----------------
    /// * `trajectories`: trajectories in the order they should be scanned.
    ///
    /// Return
    /// ----------
    /// * The set, or [`ProxOrbitError::DuplicateTrajectoryName`] naming the first repeated name.
    pub fn from_trajectories(trajectories: Vec<Trajectory>) -> Result<Self, ProxOrbitError> {
        let mut set = TrajectorySet::new();
        for trajectory in trajectories {
            set.push(trajectory)?;
        }
        Ok(set)
    }

    /// Append a trajectory at the end of the scan order.
    pub fn push(&mut self, trajectory: Trajectory) -> Result<(), ProxOrbitError> {
        if self.index.contains_key(&trajectory.name) {
            return Err(ProxOrbitError::DuplicateTrajectoryName(trajectory.name));
        }
        self.index
            .insert(trajectory.name.clone(), self.trajectories.len());
        self.trajectories.push(trajectory);
        Ok(())
    }

    /// Build a set from trajectories whose names are known to be distinct.
    pub(crate) fn from_distinct(trajectories: Vec<Trajectory>) -> Self {
        debug_assert!(
            trajectories.iter().map(|t| &t.name).all_unique(),
            "trajectory names must be distinct"
        );
        let index = trajectories
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.clone(), i))
            .collect();
        TrajectorySet {
            trajectories,
            index,
        }
    }

    /// Rebuild a set whose members are a one-to-one image of `self` (same names, same order).
    pub(crate) fn map_trajectories<F>(&self, f: F) -> Self
    where
        F: FnMut(&Trajectory) -> Trajectory,
    {
        TrajectorySet {
            trajectories: self.trajectories.iter().map(f).collect(),
            index: self.index.clone(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trajectory> {
        self.trajectories.iter()
    }

    pub fn as_slice(&self) -> &[Trajectory] {
        &self.trajectories
    }

    /// Look a trajectory up by name.
    pub fn get(&self, name: &str) -> Option<&Trajectory> {
        self.index.get(name).map(|&i| &self.trajectories[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Names in scan order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trajectories.iter().map(|t| t.name.as_str())
    }

    /// Total number of points across all trajectories.
    pub fn total_points(&self) -> usize {
        self.trajectories.iter().map(Trajectory::len).sum()
    }

    pub fn into_vec(self) -> Vec<Trajectory> {
        self.trajectories
    }
}

impl PartialEq for TrajectorySet {
    fn eq(&self, other: &Self) -> bool {
        self.trajectories == other.trajectories
    }
}

impl Index<usize> for TrajectorySet {
    type Output = Trajectory;

    fn index(&self, index: usize) -> &Self::Output {
        &self.trajectories[index]
    }
}

impl<'a> IntoIterator for &'a TrajectorySet {
    type Item = &'a Trajectory;
    type IntoIter = std::slice::Iter<'a, Trajectory>;

    fn into_iter(self) -> Self::IntoIter {
        self.trajectories.iter()
    }
}

impl Serialize for TrajectorySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.trajectories)
    }
}

#[cfg(test)]
mod trajectory_set_test {
    use super::*;

    fn traj(name: &str, n: usize) -> Trajectory {
        Trajectory::new(
            name,
            (0..n).map(|t| Point::new(t, t as f64, 0.0, 0.0)).collect(),
        )
    }

    #[test]
    fn test_lookup_and_order() {
        let set = TrajectorySet::from_trajectories(vec![traj("B", 2), traj("A", 3)]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(set.get("A").unwrap().len(), 3);
        assert!(set.get("C").is_none());
        assert_eq!(set.total_points(), 5);
        assert_eq!(set[0].name, "B");
    }

    #[test]
    fn test_slice_and_owned_views() {
        let set = TrajectorySet::from_trajectories(vec![traj("A", 2), traj("B", 1)]).unwrap();
        assert_eq!(set.as_slice().len(), 2);
        assert_eq!(set.as_slice()[1].name, "B");

        let owned = set.clone().into_vec();
        assert_eq!(owned.as_slice(), set.as_slice());
        assert_eq!(TrajectorySet::from_trajectories(owned).unwrap(), set);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = TrajectorySet::from_trajectories(vec![traj("ISS", 1), traj("ISS", 2)]);
        assert_eq!(
            err.unwrap_err(),
            ProxOrbitError::DuplicateTrajectoryName("ISS".into())
        );
    }

    #[test]
    fn test_point_distance_is_symmetric() {
        let a = Point::new(0, 1.0, 2.0, 3.0);
        let b = Point::new(0, 4.0, 6.0, 3.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_map_keeps_index() {
        let set = TrajectorySet::from_trajectories(vec![traj("A", 1), traj("B", 1)]).unwrap();
        let mapped = set.map_trajectories(|t| traj(&t.name, 4));
        assert_eq!(mapped.get("B").unwrap().len(), 4);
        assert_eq!(mapped.names().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_serialize_as_sequence() {
        let set = TrajectorySet::from_trajectories(vec![traj("A", 1)]).unwrap();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json[0]["name"], "A");
        assert_eq!(json[0]["points"][0]["t"], 0);
    }
}
