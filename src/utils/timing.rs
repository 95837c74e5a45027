use std::time::{Duration, Instant};

/// Runs `f` and returns its output together with the time it took
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let output = f();
    (output, start.elapsed())
}

pub trait DurExt {
    fn as_millis_f64(&self) -> f64;
}

impl DurExt for Duration {
    fn as_millis_f64(&self) -> f64 {
        const NANOS_PER_MILLI: f64 = 1_000_000.0;
        self.as_nanos() as f64 / NANOS_PER_MILLI
    }
}

/// Human readable duration with a unit picked for its magnitude
pub fn format_duration(duration: Duration) -> String {
    if duration < Duration::from_millis(1) {
        format!("{}µs", duration.as_micros())
    } else if duration < Duration::from_secs(1) {
        format!("{:.3}ms", duration.as_millis_f64())
    } else {
        format!("{:.3}s", duration.as_secs_f64())
    }
}
