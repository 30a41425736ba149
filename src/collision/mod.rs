//! # Pairwise close-approach detection
//!
//! Scans every unordered pair of trajectories of a [`TrajectorySet`] at every aligned
//! timestep, tracks the global minimum distance and records a [`CloseApproachEvent`]
//! whenever the distance is **strictly** below the threshold.
//!
//! ## Scan order
//! -----------------
//! Pairs are visited as `(i, j)` with `i < j` in set order (via
//! [`itertools::Itertools::tuple_combinations`]), and each pair is walked over
//! `t = 0 .. min(len_i, len_j)`. Events are therefore ordered by `i`, then `j`, then `t`,
//! and a pair is never reported twice (`A ↔ B` but never `B ↔ A`).
//!
//! ## Alignment
//! -----------------
//! Point `k` of one trajectory is compared with point `k` of the other. This assumes both
//! were sampled at the same cadence, which holds for every source of this crate.
//!
//! ## Complexity
//! -----------------
//! `O(P²·S)` for `P` trajectories of `S` points. At tens of objects and dozens of steps
//! this needs no spatial index; it is the first bottleneck for much larger catalogs.
//!
//! Modules
//! -----------------
//! * `display` – `comfy-table` rendering of a [`DetectionResult`].
//! * [`csv_export`] – CSV export of the event list.
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    constants::{Kilometer, TimeStep, PAIR_SEPARATOR},
    trajectories::{Point, Trajectory, TrajectorySet},
};

pub mod csv_export;
mod display;

pub use display::EventTable;

/// A sub-threshold distance between two trajectories at one aligned timestep.
///
/// `distance_km` keeps full precision; [`CloseApproachEvent::distance_label`] gives the
/// conventional one-decimal rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloseApproachEvent {
    pub pair_label: String,
    pub primary: String,
    pub secondary: String,
    pub distance_km: Kilometer,
    pub time_step: TimeStep,
}

impl CloseApproachEvent {
    pub fn new(
        primary: &str,
        secondary: &str,
        distance_km: Kilometer,
        time_step: TimeStep,
    ) -> Self {
        CloseApproachEvent {
            pair_label: format!("{primary}{PAIR_SEPARATOR}{secondary}"),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            distance_km,
            time_step,
        }
    }

    /// Distance rounded to one decimal place, e.g. `"308.5"`.
    pub fn distance_label(&self) -> String {
        format!("{:.1}", self.distance_km)
    }
}

/// Outcome of a detection run.
///
/// Fields
/// -----------------
/// * `closest_distance_km` – smallest distance seen over all pairs and timesteps, or
///   `None` when no pair could be compared (fewer than two trajectories, or no points).
/// * `events` – close approaches in scan order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetectionResult {
    pub closest_distance_km: Option<Kilometer>,
    pub events: Vec<CloseApproachEvent>,
}

impl DetectionResult {
    pub fn has_minimum(&self) -> bool {
        self.closest_distance_km.is_some()
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// The first `n` events in scan order.
    pub fn top(&self, n: usize) -> &[CloseApproachEvent] {
        &self.events[..n.min(self.events.len())]
    }

    /// `"1349.8 km"`, or `"--"` without a minimum.
    pub fn closest_label(&self) -> String {
        match self.closest_distance_km {
            Some(d) => format!("{d:.1} km"),
            None => "--".to_string(),
        }
    }

    /// Re-resolve an event to the two points it was computed from.
    ///
    /// The pair is looked up **by name** in `set`, then both trajectories are indexed at
    /// the event's timestep. Returns `None` if either name or point is missing, e.g. when
    /// `set` is not the set the event was detected on.
    pub fn resolve<'a>(
        set: &'a TrajectorySet,
        event: &CloseApproachEvent,
    ) -> Option<(&'a Point, &'a Point)> {
        let a = set.get(&event.primary)?.point(event.time_step)?;
        let b = set.get(&event.secondary)?.point(event.time_step)?;
        Some((a, b))
    }
}

/// Distance-threshold detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionDetector {
    threshold_km: Kilometer,
}

impl CollisionDetector {
    /// `threshold_km` is expected to be positive and finite; validation happens in
    /// [`MonitorParams`](crate::monitor::MonitorParams).
    pub fn new(threshold_km: Kilometer) -> Self {
        CollisionDetector { threshold_km }
    }

    pub fn threshold_km(&self) -> Kilometer {
        self.threshold_km
    }

    pub fn detect(&self, set: &TrajectorySet) -> DetectionResult {
        let mut result = DetectionResult::default();

        for (a, b) in set.iter().tuple_combinations::<(_, _)>() {
            self.scan_pair(a, b, &mut result);
        }

        info!(
            trajectories = set.len(),
            events = result.events.len(),
            closest_km = ?result.closest_distance_km,
            threshold_km = self.threshold_km,
            "collision scan complete"
        );
        result
    }

    fn scan_pair(&self, a: &Trajectory, b: &Trajectory, result: &mut DetectionResult) {
        let before = result.events.len();

        for (t, (pa, pb)) in a.points.iter().zip(&b.points).enumerate() {
            let d = pa.distance_to(pb);
            result.closest_distance_km = Some(match result.closest_distance_km {
                Some(closest) => closest.min(d),
                None => d,
            });
            if d < self.threshold_km {
                result
                    .events
                    .push(CloseApproachEvent::new(&a.name, &b.name, d, t));
            }
        }

        debug!(
            primary = %a.name,
            secondary = %b.name,
            events = result.events.len() - before,
            "pair scanned"
        );
    }
}

/// Convenience wrapper around [`CollisionDetector::detect`].
pub fn detect_collisions(set: &TrajectorySet, threshold_km: Kilometer) -> DetectionResult {
    CollisionDetector::new(threshold_km).detect(set)
}

#[cfg(test)]
mod collision_test {
    use super::*;

    fn line(name: &str, offset: f64, n: usize) -> Trajectory {
        Trajectory::new(
            name,
            (0..n).map(|t| Point::new(t, t as f64, offset, 0.0)).collect(),
        )
    }

    fn set(trajs: Vec<Trajectory>) -> TrajectorySet {
        TrajectorySet::from_trajectories(trajs).unwrap()
    }

    #[test]
    fn test_empty_and_single() {
        let empty = detect_collisions(&TrajectorySet::new(), 100.0);
        assert_eq!(empty, DetectionResult::default());

        let single = detect_collisions(&set(vec![line("A", 0.0, 10)]), 100.0);
        assert!(!single.has_minimum());
        assert!(!single.has_events());
        assert_eq!(single.closest_label(), "--");
    }

    #[test]
    fn test_pairs_without_points() {
        let result = detect_collisions(&set(vec![line("A", 0.0, 0), line("B", 1.0, 5)]), 10.0);
        assert_eq!(result.closest_distance_km, None);
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_threshold_is_strict() {
        let s = set(vec![line("A", 0.0, 3), line("B", 50.0, 3)]);

        let at = detect_collisions(&s, 50.0);
        assert_eq!(at.closest_distance_km, Some(50.0));
        assert!(at.events.is_empty());

        let above = detect_collisions(&s, 50.0 + 1e-9);
        assert_eq!(above.events.len(), 3);
    }

    #[test]
    fn test_scan_order_and_labels() {
        let s = set(vec![
            line("A", 0.0, 2),
            line("B", 1.0, 2),
            line("C", 3.0, 2),
        ]);
        let result = detect_collisions(&s, 10.0);

        let order: Vec<(&str, usize)> = result
            .events
            .iter()
            .map(|e| (e.pair_label.as_str(), e.time_step))
            .collect();
        assert_eq!(
            order,
            vec![
                ("A ↔ B", 0),
                ("A ↔ B", 1),
                ("A ↔ C", 0),
                ("A ↔ C", 1),
                ("B ↔ C", 0),
                ("B ↔ C", 1),
            ]
        );
        assert!(result.events.iter().all(|e| e.pair_label != "B ↔ A"));
        assert_eq!(result.closest_distance_km, Some(1.0));
        assert_eq!(result.closest_label(), "1.0 km");
    }

    #[test]
    fn test_unequal_lengths_use_shortest() {
        let s = set(vec![line("A", 0.0, 5), line("B", 1.0, 2)]);
        let result = detect_collisions(&s, 10.0);
        assert_eq!(result.events.len(), 2);
        assert_eq!(result.events[1].time_step, 1);
    }

    #[test]
    fn test_distance_label_and_top() {
        let event = CloseApproachEvent::new("X", "Y", 308.4567, 17);
        assert_eq!(event.distance_label(), "308.5");
        assert_eq!(event.pair_label, "X ↔ Y");

        let result = DetectionResult {
            closest_distance_km: Some(1.0),
            events: vec![event.clone(), event.clone(), event],
        };
        assert_eq!(result.top(2).len(), 2);
        assert_eq!(result.top(12).len(), 3);
    }

    #[test]
    fn test_resolve_event() {
        let s = set(vec![line("A", 0.0, 4), line("B", 2.0, 4)]);
        let result = detect_collisions(&s, 5.0);
        let event = &result.events[3];
        let (a, b) = DetectionResult::resolve(&s, event).unwrap();
        assert_eq!(a.t, 3);
        assert_eq!(a.distance_to(b), event.distance_km);

        let other = set(vec![line("Z", 0.0, 4)]);
        assert!(DetectionResult::resolve(&other, event).is_none());
    }
}
