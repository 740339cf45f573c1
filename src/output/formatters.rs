//! Formatting utilities for terminal output

/// Format a byte count with a unit suffix
///
/// Picks the largest unit of B/KB/MB/GB/TB that keeps the value at or above
/// one, and renders two decimals.
///
/// # Examples
/// ```
/// use bulls_cows::output::formatters::format_bytes;
///
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// ```
#[must_use]
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0.00 B".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    format!("{value:.2} {}", UNITS[exponent])
}

/// Create a distribution bar string
///
/// Non-zero counts always show at least one filled cell.
#[must_use]
pub fn distribution_bar(count: usize, max: usize, width: usize) -> String {
    let filled = if max > 0 {
        (count * width / max).max(usize::from(count > 0))
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
