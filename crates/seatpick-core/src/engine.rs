//! Seat/name pairing draws.
//!
//! The engine owns one pool of enabled seat ids and one pool of student
//! names. The two pools are independent: a name-pool reshuffle never touches
//! seat-pool state, and vice versa. Within one pass each enabled seat (and
//! each name) comes out exactly once before any repeat.

use std::fmt;

use crate::layout::SeatId;
use crate::pool::DrawPool;
use crate::registry::SeatRegistry;
use crate::roster::Roster;

/// Shown in place of a student when the name pool is empty.
pub const NO_NAME: &str = "No name";

/// Shown in place of a seat when no seats are enabled.
pub const NO_SEATS: &str = "No seats";

/// Result of one pick: the drawn student (if any), the drawn seat (if any),
/// and the seat's display label at the time of the pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub student: Option<String>,
    pub seat: Option<SeatId>,
    pub seat_label: Option<String>,
}

impl Pick {
    pub fn student_display(&self) -> &str {
        self.student.as_deref().unwrap_or(NO_NAME)
    }

    pub fn seat_display(&self) -> &str {
        self.seat_label.as_deref().unwrap_or(NO_SEATS)
    }
}

impl fmt::Display for Pick {
    /// "Alice → B3" with both pools populated; the seat part alone when no
    /// name was available; "No seats" when the seat pool is empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.student {
            Some(ref name) => write!(f, "{} → {}", name, self.seat_display()),
            None => write!(f, "{}", self.seat_display()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentEngine {
    seat_pool: DrawPool<SeatId>,
    name_pool: DrawPool<String>,
}

impl AssignmentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the seat pool from the registry's enabled set. Call after any
    /// enable/disable, load, randomize, or clear.
    pub fn rebuild_seat_pool(&mut self, registry: &SeatRegistry) {
        self.seat_pool.rebuild(registry.enabled_seats());
    }

    /// Reload the name pool from the roster. Call after roster edits.
    pub fn rebuild_name_pool(&mut self, roster: &Roster) {
        self.name_pool.rebuild(roster.names());
    }

    /// Draw one student and one seat. An empty name pool yields a pick with
    /// no student (the seat is still reported); an empty seat pool yields no
    /// seat. When both draws succeed the roster entry's last assignment is
    /// updated - the caller persists the roster.
    pub fn pick(&mut self, registry: &SeatRegistry, roster: &mut Roster) -> Pick {
        let student = self.name_pool.draw().ok();
        let seat = self.seat_pool.draw().ok();

        if let (Some(name), Some(seat)) = (&student, seat) {
            roster.record_assignment(name, seat);
        }

        let seat_label = seat.map(|s| registry.label(s));
        Pick {
            student,
            seat,
            seat_label,
        }
    }

    /// Seats left in the current pass, for the "remaining seats" counter.
    pub fn remaining_seats(&self) -> usize {
        self.seat_pool.remaining()
    }
}
