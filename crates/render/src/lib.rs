//! Rendering adapter: renderer-agnostic interface over a session.
//!
//! # Invariants
//! - Renderers read session state; they never mutate the grid or clock.
//! - The status line derives only from the clock's pause state and rate.

mod renderer;
mod status;

pub use renderer::{Renderer, TextRenderer};
pub use status::{format_rate, status_text};
