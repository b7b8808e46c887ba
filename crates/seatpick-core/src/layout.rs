//! Seat identifiers and the room's row layout.
//!
//! A classroom is two blocks of rows separated by an aisle. Each row holds a
//! fixed number of seats numbered from 1, so a seat id is a row letter plus a
//! column number ("A1"). The layout determines the fixed enumeration order
//! used for grid rendering and chart export.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A single seat position: row letter plus 1-based column number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    row: char,
    num: u8,
}

impl SeatId {
    pub fn new(row: char, num: u8) -> Self {
        Self {
            row: row.to_ascii_uppercase(),
            num,
        }
    }

    pub fn row(&self) -> char {
        self.row
    }

    pub fn num(&self) -> u8 {
        self.num
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.num)
    }
}

impl FromStr for SeatId {
    type Err = Error;

    /// Parse "A1" / "b12" into a seat id. Accepts a lowercase row letter;
    /// rejects anything that is not one letter followed by a positive number.
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let mut chars = s.chars();
        let row = chars
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .ok_or_else(|| Error::InvalidSeatId(s.to_string()))?;
        let num: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| Error::InvalidSeatId(s.to_string()))?;
        if num == 0 {
            return Err(Error::InvalidSeatId(s.to_string()));
        }
        Ok(SeatId::new(row, num))
    }
}

/// Row configuration for a classroom: a left block and a right block of
/// lettered rows, each `seats_per_row` wide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomLayout {
    pub left_rows: Vec<char>,
    pub right_rows: Vec<char>,
    pub seats_per_row: u8,
}

impl Default for RoomLayout {
    fn default() -> Self {
        Self {
            left_rows: vec!['A', 'B', 'C', 'D', 'E'],
            right_rows: vec!['F', 'G', 'H', 'I'],
            seats_per_row: 4,
        }
    }
}

impl RoomLayout {
    /// All seat ids in fixed layout order: for each row position, the left
    /// block's seats then the right block's. Rows past the end of the shorter
    /// block contribute only the longer block's seats.
    pub fn seat_ids(&self) -> Vec<SeatId> {
        let rows = self.left_rows.len().max(self.right_rows.len());
        let mut seats = Vec::with_capacity(rows * 2 * self.seats_per_row as usize);
        for i in 0..rows {
            if let Some(&row) = self.left_rows.get(i) {
                for n in 1..=self.seats_per_row {
                    seats.push(SeatId::new(row, n));
                }
            }
            if let Some(&row) = self.right_rows.get(i) {
                for n in 1..=self.seats_per_row {
                    seats.push(SeatId::new(row, n));
                }
            }
        }
        seats
    }

    pub fn seat_count(&self) -> usize {
        (self.left_rows.len() + self.right_rows.len()) * self.seats_per_row as usize
    }
}
