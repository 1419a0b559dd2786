use lifegrid_common::SimConfig;

use crate::grid::Grid;

/// Capability to advance a simulation by one generation.
///
/// The clock only ever needs this one operation, so it never sees cell state.
pub trait Advance {
    fn advance_generation(&mut self);
}

impl Advance for Grid {
    fn advance_generation(&mut self) {
        Grid::advance_generation(self);
    }
}

/// Errors from clock construction and speed adjustment.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ClockError {
    #[error("tick delay must be positive and finite, got {0}")]
    InvalidDelay(f64),
    #[error("tick delay {requested} is outside [{min}, {max}]")]
    DelayOutOfRange { requested: f64, min: f64, max: f64 },
}

/// Whether generations are currently being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Paused,
    Running,
}

/// Fixed-rate generation clock.
///
/// Converts irregular frame times into discrete generation steps. Time only
/// accumulates while running; each step consumes exactly one `tick_delay`
/// from the accumulator so fractional overrun carries into the next step.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    paused: bool,
    accumulated: f64,
    tick_delay: f64,
    min_tick_delay: f64,
    max_tick_delay: f64,
}

impl SimulationClock {
    /// A paused clock with the given delay. Speed adjustment may move the
    /// delay up to 64x either way; a bound that underflows or overflows collapses onto `tick_delay`.
    pub fn new(tick_delay: f64) -> Result<Self, ClockError> {
        if !valid_delay(tick_delay) {
            return Err(ClockError::InvalidDelay(tick_delay));
        }
        let min = tick_delay / 64.0;
        let max = tick_delay * 64.0;
        Self::with_bounds(
            tick_delay,
            if valid_delay(min) { min } else { tick_delay },
            if valid_delay(max) { max } else { tick_delay },
        )
    }

    /// A paused clock using the configured delay and bounds.
    pub fn from_config(config: &SimConfig) -> Result<Self, ClockError> {
        Self::with_bounds(
            config.tick_delay,
            config.min_tick_delay,
            config.max_tick_delay,
        )
    }

    /// A paused clock with explicit speed bounds.
    pub fn with_bounds(tick_delay: f64, min: f64, max: f64) -> Result<Self, ClockError> {
        for value in [tick_delay, min, max] {
            if !valid_delay(value) {
                return Err(ClockError::InvalidDelay(value));
            }
        }
        if tick_delay < min || tick_delay > max {
            return Err(ClockError::DelayOutOfRange {
                requested: tick_delay,
                min,
                max,
            });
        }
        Ok(Self {
            paused: true,
            accumulated: 0.0,
            tick_delay,
            min_tick_delay: min,
            max_tick_delay: max,
        })
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn state(&self) -> ClockState {
        if self.paused {
            ClockState::Paused
        } else {
            ClockState::Running
        }
    }

    /// Seconds between generations.
    pub fn tick_delay(&self) -> f64 {
        self.tick_delay
    }

    /// Seconds accumulated toward the next generation.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Flip between paused and running. Accumulated time is kept.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        tracing::info!(state = ?self.state(), "clock toggled");
    }

    /// Force the paused state.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Halve (`faster`) or double the tick delay. A result outside the
    /// configured bounds is rejected and the delay is left unchanged.
    /// Returns the new delay.
    pub fn set_speed(&mut self, faster: bool) -> Result<f64, ClockError> {
        let requested = if faster {
            self.tick_delay / 2.0
        } else {
            self.tick_delay * 2.0
        };
        if !valid_delay(requested) {
            return Err(ClockError::InvalidDelay(requested));
        }
        if requested < self.min_tick_delay || requested > self.max_tick_delay {
            return Err(ClockError::DelayOutOfRange {
                requested,
                min: self.min_tick_delay,
                max: self.max_tick_delay,
            });
        }
        self.tick_delay = requested;
        tracing::debug!(tick_delay = requested, rate = self.reported_rate(), "speed changed");
        Ok(requested)
    }

    /// Scheduling step, called once per frame with the seconds elapsed since
    /// the previous frame. Advances `target` by at most one generation and
    /// returns whether it did.
    pub fn on_frame<A: Advance + ?Sized>(&mut self, elapsed: f64, target: &mut A) -> bool {
        if self.paused {
            return false;
        }
        if elapsed.is_finite() && elapsed >= 0.0 {
            self.accumulated += elapsed;
        } else {
            tracing::warn!(elapsed, "ignoring invalid frame time");
        }
        if self.accumulated < self.tick_delay {
            return false;
        }
        self.accumulated -= self.tick_delay;
        target.advance_generation();
        tracing::trace!(leftover = self.accumulated, "tick");
        true
    }

    /// Display-only speed figure: `0.5 / tick_delay`, so the reference
    /// delay of half a second reads as 1.
    pub fn reported_rate(&self) -> f64 {
        0.5 / self.tick_delay
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        let config = SimConfig::default();
        Self {
            paused: true,
            accumulated: 0.0,
            tick_delay: config.tick_delay,
            min_tick_delay: config.min_tick_delay,
            max_tick_delay: config.max_tick_delay,
        }
    }
}

fn valid_delay(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter(u32);

    impl Advance for Counter {
        fn advance_generation(&mut self) {
            self.0 += 1;
        }
    }

    fn running(delay: f64) -> SimulationClock {
        let mut c = SimulationClock::new(delay).unwrap();
        c.toggle_pause();
        c
    }

    #[test]
    fn starts_paused_with_default_delay() {
        let c = SimulationClock::default();
        assert!(c.is_paused());
        assert_eq!(c.state(), ClockState::Paused);
        assert_eq!(c.tick_delay(), 0.5);
        assert_eq!(c.accumulated(), 0.0);
        assert_eq!(c.reported_rate(), 1.0);
    }

    #[test]
    fn invalid_delay_rejected() {
        assert_eq!(
            SimulationClock::new(0.0).unwrap_err(),
            ClockError::InvalidDelay(0.0)
        );
        assert!(SimulationClock::new(-1.0).is_err());
        assert!(SimulationClock::new(f64::INFINITY).is_err());
        assert!(SimulationClock::new(f64::NAN).is_err());
        assert!(matches!(
            SimulationClock::with_bounds(1.0, 2.0, 4.0),
            Err(ClockError::DelayOutOfRange { .. })
        ));
    }

    #[test]
    fn extreme_delays_keep_usable_bounds() {
        let tiny = SimulationClock::new(f64::MIN_POSITIVE).unwrap();
        assert_eq!(tiny.tick_delay(), f64::MIN_POSITIVE);
        let smallest = SimulationClock::new(5e-324).unwrap();
        assert_eq!(smallest.tick_delay(), 5e-324);
        let mut huge = SimulationClock::new(f64::MAX).unwrap();
        assert!(huge.set_speed(false).is_err());
        assert_eq!(huge.tick_delay(), f64::MAX);
    }

    #[test]
    fn invalid_delay_error_names_given_value() {
        assert_eq!(
            SimulationClock::new(-1.0).unwrap_err(),
            ClockError::InvalidDelay(-1.0)
        );
        assert!(matches!(
            SimulationClock::new(f64::NAN),
            Err(ClockError::InvalidDelay(v)) if v.is_nan()
        ));
    }

    #[test]
    fn paused_frame_does_nothing() {
        let mut c = SimulationClock::new(0.5).unwrap();
        let mut target = Counter::default();
        for elapsed in [0.0, 0.4, 1.0, 1e9] {
            assert!(!c.on_frame(elapsed, &mut target));
        }
        assert_eq!(target.0, 0);
        assert_eq!(c.accumulated(), 0.0);
    }

    #[test]
    fn advances_once_enough_time_accumulates() {
        let mut c = running(0.5);
        let mut target = Counter::default();
        assert!(!c.on_frame(0.25, &mut target));
        assert_eq!(target.0, 0);
        assert!(c.on_frame(0.25, &mut target));
        assert_eq!(target.0, 1);
        assert_eq!(c.accumulated(), 0.0);
    }

    #[test]
    fn leftover_time_is_preserved() {
        let mut c = running(0.5);
        let mut target = Counter::default();
        assert!(c.on_frame(0.75, &mut target));
        assert_eq!(c.accumulated(), 0.25);
        assert!(c.on_frame(0.25, &mut target));
        assert_eq!(target.0, 2);
    }

    #[test]
    fn large_stall_advances_only_once() {
        let mut c = running(0.5);
        let mut target = Counter::default();
        assert!(c.on_frame(100.0, &mut target));
        assert_eq!(target.0, 1);
        assert_eq!(c.accumulated(), 99.5);
    }

    #[test]
    fn invalid_elapsed_adds_nothing() {
        let mut c = running(0.5);
        let mut target = Counter::default();
        assert!(!c.on_frame(-3.0, &mut target));
        assert!(!c.on_frame(f64::NAN, &mut target));
        assert_eq!(c.accumulated(), 0.0);
        assert_eq!(target.0, 0);
    }

    #[test]
    fn double_toggle_is_identity() {
        let mut c = running(0.5);
        let mut target = Counter::default();
        c.on_frame(0.125, &mut target);
        let (acc, delay, paused) = (c.accumulated(), c.tick_delay(), c.is_paused());

        c.toggle_pause();
        assert_ne!(c.is_paused(), paused);
        c.toggle_pause();
        assert_eq!(c.is_paused(), paused);
        assert_eq!(c.accumulated(), acc);
        assert_eq!(c.tick_delay(), delay);
    }

    #[test]
    fn pause_keeps_accumulated_time_for_resume() {
        let mut c = running(0.5);
        let mut target = Counter::default();
        c.on_frame(0.375, &mut target);
        c.toggle_pause();
        c.on_frame(10.0, &mut target);
        c.toggle_pause();
        assert_eq!(c.accumulated(), 0.375);
        assert!(c.on_frame(0.125, &mut target));
        assert_eq!(target.0, 1);
    }

    #[test]
    fn speed_up_then_slow_down_restores_delay() {
        let mut c = SimulationClock::default();
        assert_eq!(c.set_speed(true).unwrap(), 0.25);
        assert_eq!(c.reported_rate(), 2.0);
        assert_eq!(c.set_speed(false).unwrap(), 0.5);
        assert_eq!(c.tick_delay(), 0.5);
    }

    #[test]
    fn speed_bounds_reject_without_change() {
        let mut c = SimulationClock::with_bounds(0.5, 0.25, 1.0).unwrap();
        c.set_speed(true).unwrap();
        assert!(matches!(
            c.set_speed(true),
            Err(ClockError::DelayOutOfRange { requested, .. }) if requested == 0.125
        ));
        assert_eq!(c.tick_delay(), 0.25);

        c.set_speed(false).unwrap();
        c.set_speed(false).unwrap();
        assert!(c.set_speed(false).is_err());
        assert_eq!(c.tick_delay(), 1.0);
    }

    #[test]
    fn default_bounds_allow_six_halvings() {
        let mut c = SimulationClock::default();
        for _ in 0..6 {
            c.set_speed(true).unwrap();
        }
        assert_eq!(c.reported_rate(), 64.0);
        assert!(c.set_speed(true).is_err());
    }

    #[test]
    fn speed_change_while_paused_is_accepted() {
        let mut c = SimulationClock::default();
        assert!(c.is_paused());
        c.set_speed(false).unwrap();
        assert_eq!(c.tick_delay(), 1.0);
        assert!(c.is_paused());
    }

    #[test]
    fn drives_a_grid() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 2, true).unwrap();
        let mut c = running(0.5);
        assert!(c.on_frame(0.5, &mut grid));
        assert_eq!(grid.generation(), 1);
        assert_eq!(grid.population(), 0);
    }
}
