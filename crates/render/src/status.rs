use lifegrid_kernel::SimulationClock;

/// Format a rate with six decimal places, then drop trailing zeros and a
/// trailing decimal point: `1.0` -> `"1"`, `0.25` -> `"0.25"`.
pub fn format_rate(value: f64) -> String {
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Status line for display: `PAUSED`, or `x<rate>` while running.
pub fn status_text(clock: &SimulationClock) -> String {
    if clock.is_paused() {
        "PAUSED".to_string()
    } else {
        format!("x{}", format_rate(clock.reported_rate()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_rate(1.0), "1");
        assert_eq!(format_rate(64.0), "64");
        assert_eq!(format_rate(0.25), "0.25");
        assert_eq!(format_rate(0.015625), "0.015625");
        assert_eq!(format_rate(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn paused_clock_reads_paused() {
        let clock = SimulationClock::default();
        assert_eq!(status_text(&clock), "PAUSED");
    }

    #[test]
    fn running_clock_shows_rate() {
        let mut clock = SimulationClock::default();
        clock.toggle_pause();
        assert_eq!(status_text(&clock), "x1");
        clock.set_speed(true).unwrap();
        assert_eq!(status_text(&clock), "x2");
        clock.set_speed(false).unwrap();
        clock.set_speed(false).unwrap();
        assert_eq!(status_text(&clock), "x0.5");
    }
}
