//! Seating chart file: `Seat,Enabled,Name` CSV.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use crate::engine::AssignmentEngine;
use crate::error::{Error, Result};
use crate::layout::SeatId;
use crate::mutate::ChartMutator;
use crate::registry::SeatRegistry;

/// One parsed row of a seating chart file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRow {
    pub seat: SeatId,
    pub enabled: bool,
    pub name: String,
}

/// Serialize the chart in layout order. An unassigned seat writes an empty
/// name field, the persisted form of the sentinel.
pub fn render(registry: &SeatRegistry) -> Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(["Seat", "Enabled", "Name"])?;
    for &seat in registry.seat_ids() {
        let name = registry.assigned_name(seat).unwrap_or("");
        wtr.write_record([
            seat.to_string(),
            registry.is_enabled(seat).to_string(),
            name.to_string(),
        ])?;
    }
    wtr.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Parse chart rows, skipping anything malformed: unreadable records, rows
/// with an unparsable seat id. Missing trailing fields read as blank, so a
/// short row becomes a disabled/unassigned entry rather than an error.
pub fn parse<R: Read>(reader: R) -> Result<Vec<ChartRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                debug!(error = %e, "skipping unreadable chart row");
                continue;
            }
        };
        let Some(seat_field) = record.get(0) else {
            continue;
        };
        let seat: SeatId = match seat_field.parse() {
            Ok(s) => s,
            Err(_) => {
                debug!(field = seat_field, "skipping chart row with bad seat id");
                continue;
            }
        };
        let enabled = record
            .get(1)
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let name = record.get(2).unwrap_or("").trim().to_string();
        rows.push(ChartRow {
            seat,
            enabled,
            name,
        });
    }
    Ok(rows)
}

/// Commit parsed rows into the registry: all tardy flags and any pending
/// swap selection are cleared, each known seat takes the row's enabled flag
/// and label, seats the file does not mention keep their prior state, and
/// the seat pool is rebuilt. Rows naming unknown seats are ignored.
pub fn apply(
    registry: &mut SeatRegistry,
    engine: &mut AssignmentEngine,
    mutator: &mut ChartMutator,
    rows: &[ChartRow],
) -> Result<()> {
    mutator.cancel_selection();
    registry.clear_tardies();
    for row in rows {
        if !registry.contains(row.seat) {
            debug!(seat = %row.seat, "ignoring unknown seat in chart file");
            continue;
        }
        registry.set_label(row.seat, &row.name)?;
        registry.set_enabled(row.seat, row.enabled)?;
    }
    engine.rebuild_seat_pool(registry);
    Ok(())
}

pub fn save(registry: &SeatRegistry, path: &Path) -> Result<()> {
    let bytes = render(registry)?;
    fs::write(path, bytes)?;
    Ok(())
}

pub fn load(
    registry: &mut SeatRegistry,
    engine: &mut AssignmentEngine,
    mutator: &mut ChartMutator,
    path: &Path,
) -> Result<()> {
    let contents = fs::read_to_string(path)?;
    let rows = parse(contents.as_bytes())?;
    apply(registry, engine, mutator, &rows)
}
