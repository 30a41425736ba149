//! Table rendering of close-approach events.
//!
//! ```text
//! ┌───┬───────────────┬──────┬───────────────┐
//! │ # ┆ Pair          ┆ Step ┆ Distance [km] │
//! ╞═══╪═══════════════╪══════╪═══════════════╡
//! │ 1 ┆ SIM-3 ↔ SIM-4 ┆   17 ┆         308.5 │
//! └───┴───────────────┴──────┴───────────────┘
//! ```
use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};

use super::{CloseApproachEvent, DetectionResult};

/// Displayable view over a slice of events, optionally truncated.
pub struct EventTable<'a> {
    events: &'a [CloseApproachEvent],
    limit: Option<usize>,
}

impl<'a> EventTable<'a> {
    pub fn new(events: &'a [CloseApproachEvent]) -> Self {
        EventTable {
            events,
            limit: None,
        }
    }

    /// Show at most `n` rows; a trailing line reports how many were hidden.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    fn shown(&self) -> &'a [CloseApproachEvent] {
        match self.limit {
            Some(n) => &self.events[..n.min(self.events.len())],
            None => self.events,
        }
    }

    fn render(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("#"),
            Cell::new("Pair"),
            Cell::new("Step"),
            Cell::new("Distance [km]"),
        ]);

        for (i, event) in self.shown().iter().enumerate() {
            table.add_row(Row::from(vec![
                Cell::new(i + 1).set_alignment(CellAlignment::Right),
                Cell::new(&event.pair_label),
                Cell::new(event.time_step).set_alignment(CellAlignment::Right),
                Cell::new(event.distance_label()).set_alignment(CellAlignment::Right),
            ]));
        }

        table.to_string()
    }
}

impl fmt::Display for EventTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.events.is_empty() {
            return write!(
                f,
                "No collisions detected. All monitored distances are above threshold."
            );
        }

        write!(f, "{}", self.render())?;
        let hidden = self.events.len() - self.shown().len();
        if hidden > 0 {
            write!(f, "\n… {hidden} more event(s) not shown")?;
        }
        Ok(())
    }
}

impl fmt::Display for DetectionResult {
    /// Closest distance followed by the event table; `{:#}` shows every event, the
    /// default view stops after 12.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Closest approach: {}", self.closest_label())?;
        let table = EventTable::new(&self.events);
        if f.alternate() {
            write!(f, "{table}")
        } else {
            write!(f, "{}", table.limit(12))
        }
    }
}
