// src/utils/format.rs

// Format a duration in seconds for display. Thresholds are half-open:
// exactly 60.00 seconds already renders as minutes.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{:.2} seconds", seconds)
    } else if seconds < 3600.0 {
        format!("{:.2} minutes", seconds / 60.0)
    } else if seconds < 86400.0 {
        format!("{:.2} hours", seconds / 3600.0)
    } else if seconds < 31_536_000.0 {
        format!("{:.2} days", seconds / 86400.0)
    } else if seconds < 315_360_000.0 {
        format!("{:.2} years", seconds / 31_536_000.0)
    } else {
        "centuries".to_string()
    }
}
