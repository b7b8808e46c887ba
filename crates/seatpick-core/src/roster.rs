//! The student name list and each student's last seat assignment.

use crate::layout::SeatId;

/// One student: a name plus the seat they were last handed, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub name: String,
    pub assigned_seat: Option<SeatId>,
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<NameEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student. Trims the name; blank and duplicate names are
    /// rejected. Returns whether the entry was added.
    pub fn add(&mut self, name: &str) -> bool {
        self.add_with_seat(name, None)
    }

    pub fn add_with_seat(&mut self, name: &str, seat: Option<SeatId>) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() || self.entries.iter().any(|e| e.name == trimmed) {
            return false;
        }
        self.entries.push(NameEntry {
            name: trimmed.to_string(),
            assigned_seat: seat,
        });
        true
    }

    /// Remove a student by exact name. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        let before = self.entries.len();
        self.entries.retain(|e| e.name != trimmed);
        self.entries.len() != before
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn entries(&self) -> &[NameEntry] {
        &self.entries
    }

    /// Record the seat a student was just handed by a pick.
    pub fn record_assignment(&mut self, name: &str, seat: SeatId) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.assigned_seat = Some(seat);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_rejects_blank() {
        let mut roster = Roster::new();
        assert!(roster.add("  Alice  "));
        assert_eq!(roster.names(), ["Alice"]);
        assert!(!roster.add("   "));
        assert!(!roster.add(""));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut roster = Roster::new();
        assert!(roster.add("Alice"));
        assert!(!roster.add("Alice"));
        assert!(!roster.add(" Alice "));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut roster = Roster::new();
        roster.add("Alice");
        roster.add("Bob");
        assert!(roster.remove("Alice"));
        assert!(!roster.remove("Alice"));
        assert_eq!(roster.names(), ["Bob"]);
    }

    #[test]
    fn test_record_assignment() {
        let mut roster = Roster::new();
        roster.add("Alice");
        let seat = "B2".parse().unwrap();
        roster.record_assignment("Alice", seat);
        assert_eq!(roster.entries()[0].assigned_seat, Some(seat));

        // Unknown names are ignored.
        roster.record_assignment("Nobody", seat);
        assert_eq!(roster.len(), 1);
    }
}
