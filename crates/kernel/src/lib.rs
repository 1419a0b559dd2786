//! Simulation kernel: the cell grid, the generation rule, and the clock that
//! paces generations against wall time.
//!
//! # Invariants
//! - A generation is computed entirely from the previous state, then swapped in.
//! - Out-of-range cell access is an error, never wrapped or clamped.
//! - The clock advances at most one generation per frame.

pub mod clock;
pub mod grid;
pub mod pattern;

pub use clock::{Advance, ClockError, ClockState, SimulationClock};
pub use grid::{Grid, GridError};
pub use pattern::Pattern;
