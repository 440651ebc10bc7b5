//! Line classification for heterogeneous blocklist formats.
//!
//! Every raw line is sorted into exactly one [`LineKind`]. Rules are checked
//! in a fixed priority order and the first match wins:
//!
//! | Priority | Kind            | Example                          |
//! |----------|-----------------|----------------------------------|
//! | 1        | `Blank`         | empty or whitespace-only         |
//! | 2        | `Comment`       | `# ...`, `! ...`, `// ...`       |
//! | 3        | `Header`        | `[Adblock Plus 2.0]`             |
//! | 4        | `Exception`     | `@@\|\|good.com^`                |
//! | 5        | `CosmeticRule`  | `example.com##.ad`, `a.com#@#.x` |
//! | 6        | `AdblockRule`   | `\|\|ads.net^$third-party`       |
//! | 7        | `HostsLine`     | `0.0.0.0 tracker.com`            |
//! | 8        | `PlainDomain`   | `example.com # note`             |
//! | 9        | `Unrecognized`  | anything else                    |
//!
//! Exceptions are ranked above blocking rules so an allow-rule can never
//! surface a domain: the aggregate only ever grows.

use crate::validation::is_dotted_quad;

/// Classification of a single blocklist line.
///
/// Variants that carry a domain borrow it from the input line; it is a
/// candidate only and still has to pass validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    Header,
    Exception,
    CosmeticRule,
    AdblockRule(&'a str),
    HostsLine(&'a str),
    PlainDomain(&'a str),
    Unrecognized,
}

impl<'a> LineKind<'a> {
    /// The candidate domain carried by this line, if any.
    pub fn candidate(&self) -> Option<&'a str> {
        match *self {
            LineKind::AdblockRule(d) | LineKind::HostsLine(d) | LineKind::PlainDomain(d) => Some(d),
            _ => None,
        }
    }
}

/// Classify one raw line.
///
/// Leading and trailing whitespace (including a stray `\r`) is ignored.
pub fn classify(raw: &str) -> LineKind<'_> {
    let line = raw.trim();

    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with('#') || line.starts_with('!') || line.starts_with("//") {
        return LineKind::Comment;
    }
    if line.starts_with('[') {
        return LineKind::Header;
    }
    if line.starts_with("@@") {
        return LineKind::Exception;
    }
    if line.contains("##") || line.contains("#@#") {
        return LineKind::CosmeticRule;
    }
    if let Some(rest) = line.strip_prefix("||") {
        return match adblock_domain(rest) {
            Some(domain) => LineKind::AdblockRule(domain),
            None => LineKind::Unrecognized,
        };
    }
    if let Some(domain) = hosts_domain(line) {
        return LineKind::HostsLine(domain);
    }
    match leading_token(line) {
        Some(token) if looks_like_hostname(token) => LineKind::PlainDomain(token),
        _ => LineKind::Unrecognized,
    }
}

/// Shorthand for `classify(raw).candidate()`.
pub fn extract_candidate(raw: &str) -> Option<&str> {
    classify(raw).candidate()
}

/// `<domain>^` optionally followed by `$options`; nothing else may follow
/// the separator.
fn adblock_domain(rest: &str) -> Option<&str> {
    let (domain, tail) = rest.split_once('^')?;
    if domain.is_empty() || !looks_like_hostname(domain) {
        return None;
    }
    if tail.is_empty() || tail.starts_with('$') {
        Some(domain)
    } else {
        None
    }
}

/// A dotted-quad prefix, whitespace, then the domain token.
fn hosts_domain(line: &str) -> Option<&str> {
    let (ip, rest) = line.split_once(char::is_whitespace)?;
    if !is_dotted_quad(ip) {
        return None;
    }
    leading_token(rest.trim_start())
}

/// The first token of a line, cut at whitespace or an inline `#` comment.
fn leading_token(line: &str) -> Option<&str> {
    let end = line
        .find(|c: char| c.is_whitespace() || c == '#')
        .unwrap_or(line.len());
    let token = &line[..end];
    (!token.is_empty()).then_some(token)
}

/// Characters that can appear in a hostname-ish token. Wildcards and
/// underscores are let through here and rejected later by the validator.
fn looks_like_hostname(token: &str) -> bool {
    token
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_' | b'*'))
}
