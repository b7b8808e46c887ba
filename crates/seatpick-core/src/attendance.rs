//! Absent/tardy/present classification for export.

use crate::registry::SeatRegistry;

/// The three attendance partitions, each sorted lexicographically so export
/// output is deterministic regardless of seat layout order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceReport {
    pub absent: Vec<String>,
    pub tardy: Vec<String>,
    pub present: Vec<String>,
}

impl AttendanceReport {
    pub fn is_empty(&self) -> bool {
        self.absent.is_empty() && self.tardy.is_empty() && self.present.is_empty()
    }
}

/// Partition every assigned student by seat status: disabled seat means
/// absent, tardy flag means tardy, anything else present. Unassigned seats
/// are skipped.
pub fn classify(registry: &SeatRegistry) -> AttendanceReport {
    let mut report = AttendanceReport::default();
    for &seat in registry.seat_ids() {
        let Some(name) = registry.assigned_name(seat) else {
            continue;
        };
        if !registry.is_enabled(seat) {
            report.absent.push(name.to_owned());
        } else if registry.is_tardy(seat) {
            report.tardy.push(name.to_owned());
        } else {
            report.present.push(name.to_owned());
        }
    }
    report.absent.sort();
    report.tardy.sort();
    report.present.sort();
    report
}
