use lifegrid_common::CellPos;

/// A discrete request from the user for one frame.
///
/// Any input source (keyboard, pointer, scripted driver) produces these;
/// the session decides which ones are honored in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Flip between paused and running.
    TogglePause,
    /// Kill every cell and pause.
    Clear,
    /// Halve the delay between generations.
    SpeedUp,
    /// Double the delay between generations.
    SlowDown,
    /// Set a single cell alive or dead. Only honored while paused.
    EditCell { pos: CellPos, alive: bool },
}

impl Intent {
    /// Convenience constructor for a cell edit.
    pub fn edit(row: usize, col: usize, alive: bool) -> Self {
        Self::EditCell {
            pos: CellPos::new(row, col),
            alive,
        }
    }
}

/// Everything the simulation consumes for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Wall-clock seconds since the previous frame.
    pub elapsed: f64,
    /// Intents in the order they were produced.
    pub intents: Vec<Intent>,
}

impl FrameInput {
    pub fn new(elapsed: f64) -> Self {
        Self {
            elapsed,
            intents: Vec::new(),
        }
    }

    /// Append an intent, builder style.
    pub fn with(mut self, intent: Intent) -> Self {
        self.intents.push(intent);
        self
    }

    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }
}
