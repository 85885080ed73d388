/// Formats a byte-per-second limit; zero means no limit.
pub fn format_bandwidth(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes == 0 {
        "-".to_string()
    } else if bytes >= GB {
        format!("{:.2}GB/s", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2}MB/s", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2}KB/s", bytes as f64 / KB as f64)
    } else {
        format!("{}B/s", bytes)
    }
}

/// Anonymous mounts have no source.
pub fn or_none(value: &str) -> &str {
    if value.is_empty() { "<none>" } else { value }
}
