//! Simulation session: owns the grid and clock and applies the interaction
//! policy to each frame's intents.
//!
//! # Invariants
//! - Intents are applied before the clock runs, and both before rendering.
//! - Cell edits are honored only while paused; they are never queued.
//! - Clearing always leaves the clock paused.

mod session;

pub use session::{FrameReport, IgnoreReason, IntentOutcome, Session, SessionError};
