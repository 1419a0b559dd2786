//! User intents: the discrete requests the input layer hands the simulation
//! each frame.
//!
//! # Invariants
//! - The simulation consumes intents, never raw key or pointer events.
//! - Pointer positions are resolved to grid cells before they become intents.

pub mod intent;

pub use intent::{FrameInput, Intent};
