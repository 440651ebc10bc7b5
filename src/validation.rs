//! Centralized validation functions.
//!
//! This module provides validation for:
//! - Domain names taken from blocklist lines
//! - Dotted-quad IPv4 literals (hosts-file prefixes) and all-numeric names
//! - Source URLs

use crate::error::UpdaterError;

/// Maximum length of a single label (RFC 1035).
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum length of a full domain name (RFC 1035, without trailing dot).
pub const MAX_DOMAIN_LEN: usize = 253;

/// Check whether a string is a dotted-quad IPv4 literal shape.
///
/// Only the shape is checked (four dot-separated groups of ASCII digits);
/// `999.1.1.1` and `1234.0.0.0` still count, since hosts lists are not
/// expected to carry real addresses in their prefix.
///
/// # Examples
/// ```
/// use blocklist_updater::validation::is_dotted_quad;
/// assert!(is_dotted_quad("0.0.0.0"));
/// assert!(is_dotted_quad("127.0.0.1"));
/// assert!(!is_dotted_quad("1.2.3"));
/// assert!(!is_dotted_quad("1.2.3.a"));
/// ```
pub fn is_dotted_quad(s: &str) -> bool {
    s.split('.').count() == 4 && s.split('.').all(is_numeric_label)
}

/// Check whether a string is made only of digit groups and dots
/// (`10.0.0.1.5`, `123.456`). Such a string is an address, not a name.
pub fn is_numeric_only(s: &str) -> bool {
    s.split('.').all(is_numeric_label)
}

fn is_numeric_label(group: &str) -> bool {
    !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit())
}

/// Check a single domain label: `[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?`.
fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= MAX_LABEL_LEN
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

/// Decide whether a candidate string is a plausible domain name.
///
/// A domain needs at least one dot, every label must be alphanumeric with
/// only internal hyphens, and a name made only of digit groups is not a domain.
///
/// # Examples
/// ```
/// use blocklist_updater::validation::is_valid_domain;
/// assert!(is_valid_domain("ads.example.com"));
/// assert!(!is_valid_domain("*.wildcard.com"));
/// assert!(!is_valid_domain("-invalid.com"));
/// assert!(!is_valid_domain("0.0.0.0"));
/// assert!(!is_valid_domain("nodots"));
/// ```
pub fn is_valid_domain(candidate: &str) -> bool {
    candidate.contains('.')
        && candidate.len() <= MAX_DOMAIN_LEN
        && candidate.split('.').all(is_valid_label)
        && !is_numeric_only(candidate)
}

/// Validate and lower-case a candidate, returning `None` when it is rejected.
///
/// # Examples
/// ```
/// use blocklist_updater::validation::normalize_domain;
/// assert_eq!(normalize_domain("Ads.Example.COM").as_deref(), Some("ads.example.com"));
/// assert_eq!(normalize_domain("invalid-.com"), None);
/// ```
pub fn normalize_domain(candidate: &str) -> Option<String> {
    if is_valid_domain(candidate) {
        Some(candidate.to_ascii_lowercase())
    } else {
        None
    }
}

/// Validate that a source URL uses a scheme the fetcher speaks.
///
/// # Errors
/// Returns [`UpdaterError::InvalidUrl`] unless the URL starts with
/// `http://` or `https://` and has something after the scheme.
///
/// # Examples
/// ```
/// use blocklist_updater::validation::validate_source_url;
/// assert!(validate_source_url("https://example.com/hosts").is_ok());
/// assert!(validate_source_url("ftp://example.com/hosts").is_err());
/// ```
pub fn validate_source_url(url: &str) -> Result<(), UpdaterError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match rest {
        Some(rest) if !rest.is_empty() && !rest.contains(char::is_whitespace) => Ok(()),
        _ => Err(UpdaterError::InvalidUrl(url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_domains() {
        assert!(is_valid_domain("example.com"));
        assert!(is_valid_domain("sub.domain.example.com"));
        assert!(is_valid_domain("EXAMPLE.COM"));
        assert!(is_valid_domain("a-b.c-d.net"));
        assert!(is_valid_domain("1.example"));
        assert!(is_valid_domain("x.y"));
        assert!(is_valid_domain("123.example"));
    }

    #[test]
    fn test_invalid_domains() {
        assert!(!is_valid_domain(""));
        assert!(!is_valid_domain("nodots"));
        assert!(!is_valid_domain("localhost"));
        assert!(!is_valid_domain("*.wildcard.com"));
        assert!(!is_valid_domain("-invalid.com"));
        assert!(!is_valid_domain("invalid-.com"));
        assert!(!is_valid_domain("sub.-bad.com"));
        assert!(!is_valid_domain("double..dot.com"));
        assert!(!is_valid_domain(".leading.com"));
        assert!(!is_valid_domain("trailing.com."));
        assert!(!is_valid_domain("under_score.com"));
        assert!(!is_valid_domain("space here.com"));
        assert!(!is_valid_domain("ex/ample.com"));
        assert!(!is_valid_domain("exämple.com"));
    }

    #[test]
    fn test_ip_literals_rejected() {
        assert!(!is_valid_domain("0.0.0.0"));
        assert!(!is_valid_domain("127.0.0.1"));
        assert!(!is_valid_domain("192.168.1.1"));
        assert!(!is_valid_domain("1234.0.0.0"));
        assert!(!is_valid_domain("0.0.0.0.0"));
        assert!(!is_valid_domain("10.0.0.1.5"));
        assert!(!is_valid_domain("123.456"));
        // One letter is enough to make it a name
        assert!(is_valid_domain("10.0.0.1a"));
    }

    #[test]
    fn test_length_limits() {
        let label_63 = "a".repeat(63);
        let label_64 = "a".repeat(64);
        assert!(is_valid_domain(&format!("{}.com", label_63)));
        assert!(!is_valid_domain(&format!("{}.com", label_64)));

        // 4 * 63 + 3 dots = 255 > 253
        let too_long = vec![label_63.as_str(); 4].join(".");
        assert!(!is_valid_domain(&too_long));
        let just_fits = format!("{}.{}.{}.{}", label_63, label_63, label_63, "a".repeat(61));
        assert_eq!(just_fits.len(), 253);
        assert!(is_valid_domain(&just_fits));
    }

    #[test]
    fn test_normalize_domain_lowercases() {
        assert_eq!(
            normalize_domain("Tracker.Example.COM"),
            Some("tracker.example.com".to_string())
        );
        assert_eq!(normalize_domain("nodots"), None);
    }

    #[test]
    fn test_is_dotted_quad() {
        assert!(is_dotted_quad("0.0.0.0"));
        assert!(is_dotted_quad("255.255.255.255"));
        assert!(is_dotted_quad("999.1.1.1"));
        assert!(!is_dotted_quad(""));
        assert!(!is_dotted_quad("1.2.3"));
        assert!(!is_dotted_quad("1.2.3.4.5"));
        assert!(!is_dotted_quad("1..3.4"));
        assert!(is_dotted_quad("1234.0.0.0"));
        assert!(!is_dotted_quad("::1"));
    }

    #[test]
    fn test_is_numeric_only() {
        assert!(is_numeric_only("123.456"));
        assert!(is_numeric_only("0.0.0.0.0"));
        assert!(!is_numeric_only("1.2.3.x"));
        assert!(!is_numeric_only("1..2"));
    }

    #[test]
    fn test_validate_source_url() {
        assert!(validate_source_url("https://example.com/hosts").is_ok());
        assert!(validate_source_url("http://example.com/list").is_ok());
        assert!(validate_source_url("ftp://example.com/list").is_err());
        assert!(validate_source_url("not-a-url").is_err());
        assert!(validate_source_url("https://").is_err());
        assert!(validate_source_url("").is_err());
    }
}
