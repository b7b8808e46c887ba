//! Core engine for seatpick, a classroom seating and attendance tool.
//!
//! The library owns everything with invariants; rendering and input belong
//! to the shell crate. Modules:
//!
//! - `layout`: seat identifiers and the room's row blocks
//! - `registry`: per-seat enabled/tardy/label state
//! - `pool`: shuffle-and-draw sampling without replacement
//! - `engine`: seat/name pairing draws
//! - `mutate`: swap, randomize, and clear operations
//! - `attendance`: absent/tardy/present classification
//! - `store`: chart, roster, and attendance files
//! - `config` / `schedule`: settings and bell-period lookup

pub mod attendance;
pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod mutate;
pub mod pool;
pub mod registry;
pub mod roster;
pub mod schedule;
pub mod store;

pub use attendance::{classify, AttendanceReport};
pub use config::Config;
pub use engine::{AssignmentEngine, Pick, NO_NAME, NO_SEATS};
pub use error::{Error, Result};
pub use layout::{RoomLayout, SeatId};
pub use mutate::{ChartMutator, SwapOutcome};
pub use pool::DrawPool;
pub use registry::SeatRegistry;
pub use roster::{NameEntry, Roster};
pub use schedule::BellSchedule;
