//! Format - Formatting Utilities

use chrono::{DateTime, Local, Timelike};

/// Greeting translation key for an hour of the day
pub fn greeting_key(hour: u32) -> &'static str {
    if hour < 12 {
        "home-greeting-morning"
    } else if hour < 18 {
        "home-greeting-afternoon"
    } else {
        "home-greeting-evening"
    }
}

/// Greeting key for the current local time
pub fn greeting_key_now() -> &'static str {
    greeting_key(Local::now().hour())
}

/// Format a local datetime for display, e.g. "03 Jun. 2025, 14:32"
pub fn format_local_datetime(dt: &DateTime<Local>) -> String {
    dt.format("%d %b. %Y, %H:%M").to_string()
}

/// Format a number with thousand separators
pub fn format_number(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Price line for a plan card, e.g. "20,000 RWF"
pub fn format_rwf(amount: u32) -> String {
    format!("{} RWF", format_number(i64::from(amount)))
}

/// Format bytes as human-readable size
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_buckets() {
        assert_eq!(greeting_key(0), "home-greeting-morning");
        assert_eq!(greeting_key(11), "home-greeting-morning");
        assert_eq!(greeting_key(12), "home-greeting-afternoon");
        assert_eq!(greeting_key(17), "home-greeting-afternoon");
        assert_eq!(greeting_key(18), "home-greeting-evening");
        assert_eq!(greeting_key(23), "home-greeting-evening");
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(15_000), "15,000");
        assert_eq!(format_number(300_000), "300,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(-5_126), "-5,126");
    }

    #[test]
    fn rwf_prices() {
        assert_eq!(format_rwf(20_000), "20,000 RWF");
        assert_eq!(format_rwf(700_000), "700,000 RWF");
    }

    #[test]
    fn byte_sizes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(1_400_000), "1.34 MB");
    }

}
