//! Flat-file persistence: the seating chart and roster CSVs and the
//! attendance text export.
//!
//! Loaders parse the whole file into rows before mutating any in-memory
//! state, and savers serialize into a buffer and write once, so an I/O or
//! parse failure never leaves the chart half-applied.

pub mod attendance;
pub mod chart;
pub mod roster;
