//! Formatting helpers for progress and summary output.
//!
//! - [`group_digits`] - Exact counts with thousands separators (1,234,567)
//! - [`format_size`] - Binary byte sizes (512 B, 1.5 KiB, 2.0 MiB)
//! - [`display_url`] - Shorten a source URL for a fixed-width column

/// Write a count in full with `,` between groups of three digits.
///
/// Domain totals are compared between runs, so they are never rounded.
///
/// # Examples
/// ```
/// use blocklist_updater::utils::group_digits;
/// assert_eq!(group_digits(500), "500");
/// assert_eq!(group_digits(1500), "1,500");
/// assert_eq!(group_digits(1_234_567), "1,234,567");
/// ```
pub fn group_digits(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const SIZE_UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

/// Byte size in binary units with one decimal; plain bytes below 1 KiB.
///
/// # Examples
/// ```
/// use blocklist_updater::utils::format_size;
/// assert_eq!(format_size(1024), "1.0 KiB");
/// assert_eq!(format_size(1_500_000), "1.4 MiB");
/// ```
pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = SIZE_UNITS[0];
    for next in &SIZE_UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = *next;
    }
    format!("{:.1} {}", value, unit)
}

/// Drop the scheme from a URL and keep its tail within `max_len` characters.
///
/// The end of a list URL (the file name) is usually what tells sources
/// apart, so the front is elided.
///
/// # Examples
/// ```
/// use blocklist_updater::utils::display_url;
/// assert_eq!(display_url("https://example.com/hosts", 30), "example.com/hosts");
/// assert_eq!(display_url("https://example.com/some/long/path/hosts.txt", 17), "...path/hosts.txt");
/// ```
pub fn display_url(url: &str, max_len: usize) -> String {
    let bare = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    let len = bare.chars().count();
    if len <= max_len {
        return bare.to_string();
    }

    let keep = max_len.saturating_sub(3);
    let tail: String = bare.chars().skip(len - keep).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(999_999), "999,999");
        assert_eq!(group_digits(12_345_678), "12,345,678");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1500), "1.5 KiB");
        assert_eq!(format_size(1_500_000), "1.4 MiB");
        assert_eq!(format_size(1_500_000_000), "1.4 GiB");
        // Largest unit keeps growing instead of overflowing the table
        assert_eq!(format_size(2048 * 1024usize.pow(4)), "2048.0 TiB");
    }

    #[test]
    fn test_display_url() {
        assert_eq!(display_url("http://a.example/list", 40), "a.example/list");
        assert_eq!(display_url("a.example/list", 40), "a.example/list");
        assert_eq!(display_url("https://abcdefghij.example", 10), "...example");
        assert_eq!(display_url("https://abcdef.example", 2), "...");
    }

    #[test]
    fn test_display_url_multibyte() {
        // Must not split inside a character
        assert_eq!(display_url("https://ééééé.example/ü", 6), "...e/ü");
    }
}
