//! Elapsed/allotted time rendering as `HH:MM:SS` or `D+HH:MM:SS`.

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_DAY: u64 = 86_400;

/// Format a non-negative number of seconds for display.
///
/// Seconds are rounded to the nearest whole second before splitting into
/// fields, so the output never shows `:60`. Days are only shown when
/// non-zero and are not zero-padded; the other fields always are.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;

    let days = total / SECS_PER_DAY;
    let rem = total % SECS_PER_DAY;
    let hours = rem / SECS_PER_HOUR;
    let minutes = rem % SECS_PER_HOUR / SECS_PER_MINUTE;
    let secs = rem % SECS_PER_MINUTE;

    if days > 0 {
        format!("{}D+{:02}:{:02}:{:02}", days, hours, minutes, secs)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}
