use lifegrid_common::{CellPos, ConfigError, SimConfig};
use lifegrid_input::{FrameInput, Intent};
use lifegrid_kernel::{ClockError, Grid, GridError, Pattern, SimulationClock};

/// Errors from session construction and seeding.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Clock(#[from] ClockError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("the grid can only be edited while paused")]
    Running,
}

/// Why an intent was dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IgnoreReason {
    /// Cell edits are not accepted while the simulation runs.
    Running,
    /// The edit targeted a cell outside the grid.
    OutOfBounds(GridError),
    /// The speed change would leave the allowed delay range.
    SpeedLimit(ClockError),
}

/// Result of applying a single intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntentOutcome {
    Applied,
    Ignored(IgnoreReason),
}

impl IntentOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// What happened during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// A generation was advanced this frame.
    pub advanced: bool,
    /// Intents that took effect.
    pub applied: usize,
    /// Intents that were dropped.
    pub ignored: usize,
}

/// The owned simulation state for one run: a grid and the clock pacing it.
///
/// The driver creates one session and feeds it every frame. Renderers read
/// it between frames through [`Session::grid`] and [`Session::clock`].
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    clock: SimulationClock,
}

impl Session {
    /// Build a paused session with an all-dead grid.
    pub fn new(config: &SimConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let grid = Grid::from_config(config);
        let clock = SimulationClock::from_config(config)?;
        tracing::debug!(
            rows = config.rows,
            cols = config.cols,
            tick_delay = config.tick_delay,
            "session created"
        );
        Ok(Self { grid, clock })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Apply one intent under the interaction policy.
    pub fn apply(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::TogglePause => {
                self.clock.toggle_pause();
                IntentOutcome::Applied
            }
            Intent::Clear => {
                self.grid.clear();
                self.clock.pause();
                tracing::info!("grid cleared");
                IntentOutcome::Applied
            }
            Intent::SpeedUp | Intent::SlowDown => {
                match self.clock.set_speed(intent == Intent::SpeedUp) {
                    Ok(_) => IntentOutcome::Applied,
                    Err(e) => {
                        tracing::debug!("speed change dropped: {e}");
                        IntentOutcome::Ignored(IgnoreReason::SpeedLimit(e))
                    }
                }
            }
            Intent::EditCell { pos, alive } => {
                if !self.clock.is_paused() {
                    tracing::debug!(%pos, "edit dropped while running");
                    return IntentOutcome::Ignored(IgnoreReason::Running);
                }
                match self.grid.set(pos.row, pos.col, alive) {
                    Ok(()) => IntentOutcome::Applied,
                    Err(e) => {
                        tracing::warn!("edit dropped: {e}");
                        IntentOutcome::Ignored(IgnoreReason::OutOfBounds(e))
                    }
                }
            }
        }
    }

    /// Run one frame: apply `intents` in order, then let the clock decide
    /// whether to advance a generation.
    pub fn frame(&mut self, elapsed: f64, intents: &[Intent]) -> FrameReport {
        let mut report = FrameReport::default();
        for &intent in intents {
            if self.apply(intent).is_applied() {
                report.applied += 1;
            } else {
                report.ignored += 1;
            }
        }
        report.advanced = self.clock.on_frame(elapsed, &mut self.grid);
        report
    }

    /// [`Session::frame`] over a collected [`FrameInput`].
    pub fn run_frame(&mut self, input: &FrameInput) -> FrameReport {
        self.frame(input.elapsed, &input.intents)
    }

    /// Place a pattern on the grid. Like single-cell edits, this is only
    /// allowed while paused.
    pub fn stamp(&mut self, pattern: Pattern, origin: CellPos) -> Result<(), SessionError> {
        if !self.clock.is_paused() {
            return Err(SessionError::Running);
        }
        self.grid.stamp(pattern, origin)?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            clock: SimulationClock::default(),
        }
    }
}
