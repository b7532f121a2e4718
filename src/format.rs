use chrono::{DateTime, Local};
use std::time::SystemTime;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

pub const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shown when an entry's modification time cannot be read.
pub const UNKNOWN_MODIFIED: &str = "unknown";

/// Format a byte count with one decimal and a binary unit (1 KB = 1024 B).
///
/// `None` renders as `-`. Scaling stops at TB.
#[must_use]
pub fn format_size(size: Option<u64>) -> String {
    let Some(bytes) = size else {
        return "-".to_string();
    };

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.1} {}", SIZE_UNITS[unit])
}

#[must_use]
pub fn format_modified(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format(MODIFIED_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::time::Duration;

    #[test]
    fn test_format_size_missing() {
        assert_eq!(format_size(None), "-");
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(Some(0)), "0.0 B");
        assert_eq!(format_size(Some(500)), "500.0 B");
        assert_eq!(format_size(Some(1023)), "1023.0 B");
    }

    #[test]
    fn test_format_size_scaled() {
        assert_eq!(format_size(Some(1024)), "1.0 KB");
        assert_eq!(format_size(Some(1536)), "1.5 KB");
        assert_eq!(format_size(Some(2048)), "2.0 KB");
        assert_eq!(format_size(Some(1024 * 1024 * 3 / 2)), "1.5 MB");
        assert_eq!(format_size(Some(1024u64.pow(3))), "1.0 GB");
        assert_eq!(format_size(Some(1024u64.pow(4))), "1.0 TB");
    }

    #[test]
    fn test_format_size_caps_at_tb() {
        assert_eq!(format_size(Some(1024u64.pow(5))), "1024.0 TB");
        assert!(format_size(Some(u64::MAX)).ends_with(" TB"));
    }

    #[test]
    fn test_format_modified_shape() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let rendered = format_modified(time);

        assert_eq!(rendered.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&rendered, MODIFIED_FORMAT).is_ok());
    }
}
