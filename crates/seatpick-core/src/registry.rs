//! Per-seat state: enabled/disabled, tardy, and the assigned student label.
//!
//! The registry is the single owner of seat status. A seat with no assigned
//! student has label `None` internally; the "label equals the seat's own id"
//! sentinel exists only at the file-format and display boundary.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::layout::{RoomLayout, SeatId};

#[derive(Debug, Clone)]
struct SeatState {
    enabled: bool,
    tardy: bool,
    label: Option<String>,
}

impl Default for SeatState {
    fn default() -> Self {
        Self {
            enabled: true,
            tardy: false,
            label: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeatRegistry {
    layout: RoomLayout,
    order: Vec<SeatId>,
    seats: HashMap<SeatId, SeatState>,
}

impl SeatRegistry {
    /// Every seat starts enabled, non-tardy, unassigned.
    pub fn new(layout: RoomLayout) -> Self {
        let order = layout.seat_ids();
        let seats = order.iter().map(|&s| (s, SeatState::default())).collect();
        Self {
            layout,
            order,
            seats,
        }
    }

    pub fn layout(&self) -> &RoomLayout {
        &self.layout
    }

    /// Deterministic enumeration in layout order. Grid rendering and chart
    /// export both iterate this.
    pub fn seat_ids(&self) -> &[SeatId] {
        &self.order
    }

    pub fn contains(&self, seat: SeatId) -> bool {
        self.seats.contains_key(&seat)
    }

    fn state(&self, seat: SeatId) -> Option<&SeatState> {
        self.seats.get(&seat)
    }

    fn state_mut(&mut self, seat: SeatId) -> Result<&mut SeatState> {
        self.seats.get_mut(&seat).ok_or(Error::UnknownSeat(seat))
    }

    pub fn is_enabled(&self, seat: SeatId) -> bool {
        self.state(seat).map(|s| s.enabled).unwrap_or(false)
    }

    pub fn is_tardy(&self, seat: SeatId) -> bool {
        self.state(seat).map(|s| s.tardy).unwrap_or(false)
    }

    /// The student assigned to this seat, if any.
    pub fn assigned_name(&self, seat: SeatId) -> Option<&str> {
        self.state(seat).and_then(|s| s.label.as_deref())
    }

    pub fn has_student(&self, seat: SeatId) -> bool {
        self.assigned_name(seat).is_some()
    }

    /// Display label: the assigned student's name, or the seat id itself when
    /// unassigned. Every seat always has a displayable label.
    pub fn label(&self, seat: SeatId) -> String {
        self.assigned_name(seat)
            .map(str::to_owned)
            .unwrap_or_else(|| seat.to_string())
    }

    /// Disabling a seat clears its tardy flag. Enabling does not restore it;
    /// the caller decides present/tardy afterwards. The seat pool must be
    /// rebuilt after enabled-set membership changes.
    pub fn set_enabled(&mut self, seat: SeatId, enabled: bool) -> Result<()> {
        let state = self.state_mut(seat)?;
        state.enabled = enabled;
        if !enabled {
            state.tardy = false;
        }
        Ok(())
    }

    /// Marking tardy only applies to an enabled seat with an assigned
    /// student; otherwise the call is a defined no-op. Clearing is always
    /// allowed.
    pub fn set_tardy(&mut self, seat: SeatId, tardy: bool) -> Result<()> {
        let state = self.state_mut(seat)?;
        if tardy && (!state.enabled || state.label.is_none()) {
            return Ok(());
        }
        state.tardy = tardy;
        Ok(())
    }

    /// Assign a student name to a seat. Blank or whitespace-only text, or
    /// text equal to the seat's own id, means "unassigned" (and clears the
    /// tardy flag, which only applies to assigned seats).
    pub fn set_label(&mut self, seat: SeatId, text: &str) -> Result<()> {
        let sentinel = seat.to_string();
        let state = self.state_mut(seat)?;
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == sentinel {
            state.label = None;
            state.tardy = false;
        } else {
            state.label = Some(trimmed.to_string());
        }
        Ok(())
    }

    pub fn enabled_seats(&self) -> Vec<SeatId> {
        self.order
            .iter()
            .copied()
            .filter(|&s| self.is_enabled(s))
            .collect()
    }

    /// All assigned student names in layout order, enabled or not.
    pub fn assigned_names(&self) -> Vec<String> {
        self.order
            .iter()
            .filter_map(|&s| self.assigned_name(s).map(str::to_owned))
            .collect()
    }

    /// Clear every seat's tardy flag, leaving enabled state and labels alone.
    pub fn clear_tardies(&mut self) {
        for state in self.seats.values_mut() {
            state.tardy = false;
        }
    }

    /// Full reset: every seat enabled, non-tardy, unassigned.
    pub fn clear(&mut self) {
        for state in self.seats.values_mut() {
            *state = SeatState::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(s: &str) -> SeatId {
        s.parse().unwrap()
    }

    fn registry() -> SeatRegistry {
        SeatRegistry::new(RoomLayout::default())
    }

    #[test]
    fn test_new_registry_all_enabled_unassigned() {
        let reg = registry();
        for &s in reg.seat_ids() {
            assert!(reg.is_enabled(s));
            assert!(!reg.is_tardy(s));
            assert_eq!(reg.label(s), s.to_string());
            assert!(!reg.has_student(s));
        }
    }

    #[test]
    fn test_set_label_normalizes_blank() {
        let mut reg = registry();
        reg.set_label(seat("A1"), "  Alice  ").unwrap();
        assert_eq!(reg.label(seat("A1")), "Alice");

        reg.set_label(seat("A1"), "   ").unwrap();
        assert!(!reg.has_student(seat("A1")));
        assert_eq!(reg.label(seat("A1")), "A1");
    }

    #[test]
    fn test_set_label_own_id_means_unassigned() {
        let mut reg = registry();
        reg.set_label(seat("B2"), "Bob").unwrap();
        reg.set_label(seat("B2"), "B2").unwrap();
        assert!(!reg.has_student(seat("B2")));
    }

    #[test]
    fn test_unassigning_clears_tardy() {
        let mut reg = registry();
        reg.set_label(seat("A1"), "Alice").unwrap();
        reg.set_tardy(seat("A1"), true).unwrap();
        assert!(reg.is_tardy(seat("A1")));

        reg.set_label(seat("A1"), "").unwrap();
        assert!(!reg.is_tardy(seat("A1")));
    }

    #[test]
    fn test_disable_clears_tardy() {
        let mut reg = registry();
        reg.set_label(seat("A1"), "Alice").unwrap();
        reg.set_tardy(seat("A1"), true).unwrap();

        reg.set_enabled(seat("A1"), false).unwrap();
        assert!(!reg.is_enabled(seat("A1")));
        assert!(!reg.is_tardy(seat("A1")));

        // Re-enabling does not bring the flag back.
        reg.set_enabled(seat("A1"), true).unwrap();
        assert!(!reg.is_tardy(seat("A1")));
    }

    #[test]
    fn test_set_tardy_requires_enabled_assigned_seat() {
        let mut reg = registry();

        // Unassigned seat: no-op.
        reg.set_tardy(seat("A1"), true).unwrap();
        assert!(!reg.is_tardy(seat("A1")));

        // Disabled seat: no-op even with a name.
        reg.set_label(seat("B1"), "Bob").unwrap();
        reg.set_enabled(seat("B1"), false).unwrap();
        reg.set_tardy(seat("B1"), true).unwrap();
        assert!(!reg.is_tardy(seat("B1")));
    }

    #[test]
    fn test_unknown_seat_rejected() {
        let mut reg = registry();
        assert!(matches!(
            reg.set_enabled(seat("Z9"), false),
            Err(Error::UnknownSeat(_))
        ));
        assert!(!reg.is_enabled(seat("Z9")));
        assert!(!reg.contains(seat("Z9")));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut reg = registry();
        reg.set_label(seat("A1"), "Alice").unwrap();
        reg.set_tardy(seat("A1"), true).unwrap();
        reg.set_enabled(seat("C3"), false).unwrap();

        reg.clear();
        for &s in reg.seat_ids() {
            assert!(reg.is_enabled(s));
            assert!(!reg.is_tardy(s));
            assert!(!reg.has_student(s));
        }
    }

    #[test]
    fn test_enabled_seats_tracks_membership() {
        let mut reg = registry();
        assert_eq!(reg.enabled_seats().len(), 36);
        reg.set_enabled(seat("A1"), false).unwrap();
        reg.set_enabled(seat("F4"), false).unwrap();
        let enabled = reg.enabled_seats();
        assert_eq!(enabled.len(), 34);
        assert!(!enabled.contains(&seat("A1")));
    }
}
