//! Chart mutation: seat swapping, full-chart randomization, clearing.
//!
//! All mutations route through here so the registry invariants (no tardy
//! disabled seat, seat pool matching the enabled set) hold no matter which
//! shell command triggered the call.

use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::debug;

use crate::engine::AssignmentEngine;
use crate::error::{Error, Result};
use crate::layout::SeatId;
use crate::registry::SeatRegistry;

/// What a swap click resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// First click on an occupied seat: selection armed.
    Selected(SeatId),
    /// Second click on the same seat: selection cancelled.
    Deselected,
    /// Both seats occupied: labels exchanged, both stay enabled.
    Swapped { first: SeatId, second: SeatId },
    /// Occupant moved to an empty seat; the origin is cleared and disabled.
    Moved { from: SeatId, to: SeatId },
    /// Click on an unoccupied seat with nothing selected, or a resolution
    /// with no occupant to act on. Defined no-op.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct ChartMutator {
    selected: Option<SeatId>,
}

impl ChartMutator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The seat currently armed for a swap, if any.
    pub fn selected(&self) -> Option<SeatId> {
        self.selected
    }

    pub fn cancel_selection(&mut self) {
        self.selected = None;
    }

    /// Two-step swap selection. The first click arms an occupied seat; the
    /// second click resolves against it: same seat deselects, an occupied
    /// target exchanges labels, an empty target receives the occupant while
    /// the origin seat is cleared and disabled.
    pub fn swap_select(
        &mut self,
        registry: &mut SeatRegistry,
        engine: &mut AssignmentEngine,
        seat: SeatId,
    ) -> Result<SwapOutcome> {
        if !registry.contains(seat) {
            return Err(Error::UnknownSeat(seat));
        }

        let Some(first) = self.selected else {
            if !registry.has_student(seat) {
                return Ok(SwapOutcome::Ignored);
            }
            self.selected = Some(seat);
            return Ok(SwapOutcome::Selected(seat));
        };

        if first == seat {
            self.selected = None;
            return Ok(SwapOutcome::Deselected);
        }

        self.selected = None;
        let first_name = registry.assigned_name(first).map(str::to_owned);
        let second_name = registry.assigned_name(seat).map(str::to_owned);

        match (first_name, second_name) {
            (Some(a), Some(b)) => {
                registry.set_label(first, &b)?;
                registry.set_label(seat, &a)?;
                Ok(SwapOutcome::Swapped {
                    first,
                    second: seat,
                })
            }
            (Some(a), None) => {
                registry.set_label(seat, &a)?;
                registry.set_enabled(seat, true)?;
                registry.set_label(first, "")?;
                registry.set_enabled(first, false)?;
                engine.rebuild_seat_pool(registry);
                Ok(SwapOutcome::Moved {
                    from: first,
                    to: seat,
                })
            }
            (None, _) => Ok(SwapOutcome::Ignored),
        }
    }

    /// Reshuffle the whole chart: every assigned name is collected, seat
    /// positions and names are shuffled independently, and the i-th shuffled
    /// seat receives the i-th name. Seats beyond the name count end up
    /// unassigned and disabled. All tardy flags and the swap selection are
    /// cleared.
    pub fn randomize(
        &mut self,
        registry: &mut SeatRegistry,
        engine: &mut AssignmentEngine,
    ) -> Result<()> {
        self.selected = None;

        let mut names = registry.assigned_names();
        let mut seats: Vec<SeatId> = registry.seat_ids().to_vec();
        let mut rng = thread_rng();
        names.shuffle(&mut rng);
        seats.shuffle(&mut rng);

        registry.clear();
        for (i, &seat) in seats.iter().enumerate() {
            match names.get(i) {
                Some(name) => registry.set_label(seat, name)?,
                None => registry.set_enabled(seat, false)?,
            }
        }
        engine.rebuild_seat_pool(registry);
        debug!(assigned = names.len(), "randomized seating chart");
        Ok(())
    }

    /// Reset every seat and rebuild the seat pool.
    pub fn clear(&mut self, registry: &mut SeatRegistry, engine: &mut AssignmentEngine) {
        self.selected = None;
        registry.clear();
        engine.rebuild_seat_pool(registry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RoomLayout;
    use std::collections::BTreeSet;

    fn seat(s: &str) -> SeatId {
        s.parse().unwrap()
    }

    fn setup() -> (SeatRegistry, AssignmentEngine, ChartMutator) {
        let registry = SeatRegistry::new(RoomLayout::default());
        let mut engine = AssignmentEngine::new();
        engine.rebuild_seat_pool(&registry);
        (registry, engine, ChartMutator::new())
    }

    // -------------------------------------------------------------------------
    // Swap selection state machine
    // -------------------------------------------------------------------------

    #[test]
    fn test_select_requires_occupant() {
        let (mut reg, mut eng, mut mutator) = setup();
        assert_eq!(
            mutator.swap_select(&mut reg, &mut eng, seat("A1")).unwrap(),
            SwapOutcome::Ignored
        );
        assert_eq!(mutator.selected(), None);

        reg.set_label(seat("A1"), "Alice").unwrap();
        assert_eq!(
            mutator.swap_select(&mut reg, &mut eng, seat("A1")).unwrap(),
            SwapOutcome::Selected(seat("A1"))
        );
        assert_eq!(mutator.selected(), Some(seat("A1")));
    }

    #[test]
    fn test_reclick_deselects() {
        let (mut reg, mut eng, mut mutator) = setup();
        reg.set_label(seat("A1"), "Alice").unwrap();
        mutator.swap_select(&mut reg, &mut eng, seat("A1")).unwrap();

        assert_eq!(
            mutator.swap_select(&mut reg, &mut eng, seat("A1")).unwrap(),
            SwapOutcome::Deselected
        );
        assert_eq!(mutator.selected(), None);
        assert_eq!(reg.assigned_name(seat("A1")), Some("Alice"));
    }

    #[test]
    fn test_swap_exchanges_names() {
        let (mut reg, mut eng, mut mutator) = setup();
        reg.set_label(seat("A1"), "Alice").unwrap();
        reg.set_label(seat("B2"), "Bob").unwrap();

        mutator.swap_select(&mut reg, &mut eng, seat("A1")).unwrap();
        let outcome = mutator.swap_select(&mut reg, &mut eng, seat("B2")).unwrap();
        assert_eq!(
            outcome,
            SwapOutcome::Swapped {
                first: seat("A1"),
                second: seat("B2"),
            }
        );

        assert_eq!(reg.assigned_name(seat("A1")), Some("Bob"));
        assert_eq!(reg.assigned_name(seat("B2")), Some("Alice"));
        assert!(reg.is_enabled(seat("A1")));
        assert!(reg.is_enabled(seat("B2")));
        assert!(!reg.is_tardy(seat("A1")));
        assert!(!reg.is_tardy(seat("B2")));
        assert_eq!(mutator.selected(), None);
    }

    #[test]
    fn test_move_to_empty_seat_vacates_origin() {
        let (mut reg, mut eng, mut mutator) = setup();
        reg.set_label(seat("A1"), "Alice").unwrap();
        reg.set_tardy(seat("A1"), true).unwrap();

        mutator.swap_select(&mut reg, &mut eng, seat("A1")).unwrap();
        let outcome = mutator.swap_select(&mut reg, &mut eng, seat("C3")).unwrap();
        assert_eq!(
            outcome,
            SwapOutcome::Moved {
                from: seat("A1"),
                to: seat("C3"),
            }
        );

        assert_eq!(reg.assigned_name(seat("C3")), Some("Alice"));
        assert!(reg.is_enabled(seat("C3")));
        assert!(!reg.has_student(seat("A1")));
        assert!(!reg.is_enabled(seat("A1")));
        // Attendance flags stay with seats; the vacated seat loses its flag.
        assert!(!reg.is_tardy(seat("A1")));
        assert!(!reg.is_tardy(seat("C3")));
    }

    #[test]
    fn test_move_rebuilds_seat_pool() {
        let (mut reg, mut eng, mut mutator) = setup();
        reg.set_label(seat("A1"), "Alice").unwrap();
        mutator.swap_select(&mut reg, &mut eng, seat("A1")).unwrap();
        mutator.swap_select(&mut reg, &mut eng, seat("C3")).unwrap();

        // One seat disabled, so a fresh pass covers 35 seats.
        assert_eq!(eng.remaining_seats(), 35);
    }

    #[test]
    fn test_unknown_seat_is_an_error() {
        let (mut reg, mut eng, mut mutator) = setup();
        assert!(matches!(
            mutator.swap_select(&mut reg, &mut eng, seat("Z9")),
            Err(Error::UnknownSeat(_))
        ));
    }

    // -------------------------------------------------------------------------
    // Randomize / clear
    // -------------------------------------------------------------------------

    #[test]
    fn test_randomize_preserves_name_set() {
        let (mut reg, mut eng, mut mutator) = setup();
        let names = ["Alice", "Bob", "Carol"];
        for (i, name) in names.iter().enumerate() {
            let s = SeatId::new('A', i as u8 + 1);
            reg.set_label(s, name).unwrap();
        }
        reg.set_tardy(seat("A2"), true).unwrap();
        reg.set_enabled(seat("E4"), false).unwrap();

        mutator.randomize(&mut reg, &mut eng).unwrap();

        let assigned: BTreeSet<String> = reg.assigned_names().into_iter().collect();
        assert_eq!(
            assigned,
            names.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>()
        );

        // Exactly three enabled named seats, the rest disabled and empty.
        let mut enabled_named = 0;
        let mut disabled_empty = 0;
        for &s in reg.seat_ids() {
            assert!(!reg.is_tardy(s));
            if reg.is_enabled(s) {
                assert!(reg.has_student(s));
                enabled_named += 1;
            } else {
                assert!(!reg.has_student(s));
                disabled_empty += 1;
            }
        }
        assert_eq!(enabled_named, 3);
        assert_eq!(disabled_empty, 33);
        assert_eq!(eng.remaining_seats(), 3);
    }

    #[test]
    fn test_randomize_collects_names_from_disabled_seats() {
        let (mut reg, mut eng, mut mutator) = setup();
        reg.set_label(seat("A1"), "Alice").unwrap();
        reg.set_enabled(seat("A1"), false).unwrap();

        mutator.randomize(&mut reg, &mut eng).unwrap();
        assert_eq!(reg.assigned_names(), ["Alice"]);
        let occupied: Vec<SeatId> = reg
            .seat_ids()
            .iter()
            .copied()
            .filter(|&s| reg.has_student(s))
            .collect();
        assert!(reg.is_enabled(occupied[0]));
    }

    #[test]
    fn test_randomize_clears_selection() {
        let (mut reg, mut eng, mut mutator) = setup();
        reg.set_label(seat("A1"), "Alice").unwrap();
        mutator.swap_select(&mut reg, &mut eng, seat("A1")).unwrap();

        mutator.randomize(&mut reg, &mut eng).unwrap();
        assert_eq!(mutator.selected(), None);
    }

    #[test]
    fn test_clear_resets_chart_and_pool() {
        let (mut reg, mut eng, mut mutator) = setup();
        reg.set_label(seat("A1"), "Alice").unwrap();
        reg.set_enabled(seat("B2"), false).unwrap();
        eng.rebuild_seat_pool(&reg);

        mutator.clear(&mut reg, &mut eng);
        assert!(!reg.has_student(seat("A1")));
        assert!(reg.is_enabled(seat("B2")));
        assert_eq!(eng.remaining_seats(), 36);
    }
}
