//! CSV export of close-approach events.
//!
//! One row per event, columns in field order:
//! `pair_label,primary,secondary,distance_km,time_step`.
use std::io;

use camino::Utf8Path;

use crate::proxorbit_errors::ProxOrbitError;

use super::CloseApproachEvent;

/// Write `events` as CSV (with a header row) to any writer.
pub fn write_events_csv<W: io::Write>(
    events: &[CloseApproachEvent],
    writer: W,
) -> Result<(), ProxOrbitError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for event in events {
        wtr.serialize(event)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `events` as CSV to `path`, creating or truncating the file.
pub fn export_events_csv(
    events: &[CloseApproachEvent],
    path: &Utf8Path,
) -> Result<(), ProxOrbitError> {
    let file = std::fs::File::create(path)?;
    write_events_csv(events, file)
}
