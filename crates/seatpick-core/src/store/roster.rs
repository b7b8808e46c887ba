//! Roster file: `Name,Seat` CSV, one row per student. The seat column is
//! the student's last assignment and is optional.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use crate::error::{Error, Result};
use crate::layout::SeatId;
use crate::roster::Roster;

pub fn render(roster: &Roster) -> Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(["Name", "Seat"])?;
    for entry in roster.entries() {
        let seat = entry
            .assigned_seat
            .map(|s| s.to_string())
            .unwrap_or_default();
        wtr.write_record([entry.name.clone(), seat])?;
    }
    wtr.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Parse a roster file. Rows with a blank name are skipped; a blank or
/// unparsable seat field just means "never assigned".
pub fn parse<R: Read>(reader: R) -> Result<Roster> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut roster = Roster::new();
    for record in rdr.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                debug!(error = %e, "skipping unreadable roster row");
                continue;
            }
        };
        let name = record.get(0).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        let seat: Option<SeatId> = record.get(1).and_then(|v| v.parse().ok());
        roster.add_with_seat(name, seat);
    }
    Ok(roster)
}

pub fn save(roster: &Roster, path: &Path) -> Result<()> {
    let bytes = render(roster)?;
    fs::write(path, bytes)?;
    Ok(())
}

pub fn load(path: &Path) -> Result<Roster> {
    let contents = fs::read_to_string(path)?;
    parse(contents.as_bytes())
}
