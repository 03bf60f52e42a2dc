//! Formatting utilities for file sizes and timestamps.

/// Format file size for display (e.g., "1.2K", "3.4M").
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_000_000_000 {
        format!("{:.1}G", bytes as f64 / 1_000_000_000.0)
    } else if bytes >= 1_000_000 {
        format!("{:.1}M", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1}K", bytes as f64 / 1_000.0)
    } else {
        format!("{}B", bytes)
    }
}

/// Date part of a server timestamp.
///
/// The backend's format is opaque; RFC 3339-like values are cut at the `T`,
/// anything else is shown as-is.
pub fn format_mod_time(mod_time: &str) -> &str {
    match mod_time.split_once('T') {
        Some((date, _)) if date.len() == 10 => date,
        _ => mod_time,
    }
}
