//! Number and time formatting helpers shared by the snapshot builder and
//! the exporters.

/// Format a number for CSS output: rounded to at most three decimals with
/// trailing zeros trimmed, so `-180.0` renders as `-180` and `0.5` as `0.5`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    // Normalize negative zero.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

/// Append a unit suffix unless the value already carries one (text values
/// pass through verbatim).
pub fn format_with_unit(value: f64, unit: &str) -> String {
    format!("{}{}", format_number(value), unit)
}

/// `mm:ss.mmm` display form of a millisecond timestamp.
pub fn format_time(ms: f64) -> String {
    let ms = ms.max(0.0);
    let total_seconds = (ms / 1000.0).floor() as u64;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    let millis = (ms % 1000.0).floor() as u64;
    format!("{minutes}:{seconds:02}.{millis:03}")
}
