/// Elapsed-time label for an activity that started at `started_at_ms`
/// (JS epoch milliseconds), evaluated against the current clock.
pub fn activity_elapsed(started_at_ms: f64) -> String {
    elapsed_label(started_at_ms, js_sys::Date::now())
}

pub fn elapsed_label(started_at_ms: f64, now_ms: f64) -> String {
    let total_secs = ((now_ms - started_at_ms).max(0.0) / 1000.0) as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_only_below_a_minute() {
        assert_eq!(elapsed_label(0.0, 42_000.0), "42s");
        assert_eq!(elapsed_label(0.0, 0.0), "0s");
    }

    #[test]
    fn minutes_and_seconds_below_an_hour() {
        assert_eq!(elapsed_label(0.0, 200_000.0), "3m 20s");
    }

    #[test]
    fn hours_drop_the_seconds() {
        assert_eq!(elapsed_label(0.0, 7_507_000.0), "2h 5m");
    }

    #[test]
    fn clock_skew_clamps_to_zero() {
        assert_eq!(elapsed_label(10_000.0, 5_000.0), "0s");
    }
}
