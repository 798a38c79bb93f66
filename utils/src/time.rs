//! Time formatting helpers.

/// Format a duration in seconds to a human-readable string, e.g. for
/// "code expires in 10m 0s" UI copy.
pub fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}
