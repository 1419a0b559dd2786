use serde::{Deserialize, Serialize};

/// Reference grid height.
pub const DEFAULT_ROWS: usize = 50;
/// Reference grid width.
pub const DEFAULT_COLS: usize = 100;
/// Largest accepted `rows * cols`.
pub const MAX_CELLS: usize = 1 << 24;
/// Seconds between generations at startup.
pub const DEFAULT_TICK_DELAY: f64 = 0.5;

/// Errors from configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("grid of {rows}x{cols} exceeds the {max} cell limit")]
    GridTooLarge { rows: usize, cols: usize, max: usize },
    #[error("{name} must be positive and finite, got {value}")]
    InvalidDelay { name: &'static str, value: f64 },
    #[error("delay bounds out of order: min {min} <= default {default} <= max {max} does not hold")]
    BoundsOrder { min: f64, default: f64, max: f64 },
}

/// Simulation configuration: grid dimensions and clock timing.
///
/// Speed adjustment halves or doubles the tick delay; it is kept inside
/// `[min_tick_delay, max_tick_delay]`. The defaults are powers of two apart
/// from `tick_delay`, so any sequence of speed changes stays exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// Initial seconds between generations.
    pub tick_delay: f64,
    /// Smallest delay speed-up may reach.
    pub min_tick_delay: f64,
    /// Largest delay slow-down may reach.
    pub max_tick_delay: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_delay: DEFAULT_TICK_DELAY,
            min_tick_delay: DEFAULT_TICK_DELAY / 64.0,
            max_tick_delay: DEFAULT_TICK_DELAY * 64.0,
        }
    }
}

impl SimConfig {
    /// Check dimensions and delay invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows.checked_mul(self.cols).is_none_or(|n| n > MAX_CELLS) {
            return Err(ConfigError::GridTooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_CELLS,
            });
        }
        for (name, value) in [
            ("tick_delay", self.tick_delay),
            ("min_tick_delay", self.min_tick_delay),
            ("max_tick_delay", self.max_tick_delay),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidDelay { name, value });
            }
        }
        if !(self.min_tick_delay <= self.tick_delay && self.tick_delay <= self.max_tick_delay) {
            return Err(ConfigError::BoundsOrder {
                min: self.min_tick_delay,
                default: self.tick_delay,
                max: self.max_tick_delay,
            });
        }
        Ok(())
    }
}
