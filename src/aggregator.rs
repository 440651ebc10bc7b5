//! Domain aggregation across blocklist sources.

use std::collections::HashSet;

use crate::classifier::classify;
use crate::fetcher::split_lines;
use crate::validation::normalize_domain;

/// What happened to a single line fed to [`DomainSet::ingest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Not a domain line (comment, exception, cosmetic rule, ...)
    Skipped,
    /// A candidate was extracted but failed validation
    Rejected,
    /// A new domain was added to the set
    Added,
    /// A valid domain that was already present
    Duplicate,
}

/// Per-source ingest counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    pub lines: usize,
    pub candidates: usize,
    pub valid: usize,
    pub added: usize,
    pub bytes: usize,
}

impl SourceStats {
    fn record(&mut self, outcome: IngestOutcome) {
        self.lines += 1;
        match outcome {
            IngestOutcome::Skipped => {}
            IngestOutcome::Rejected => self.candidates += 1,
            IngestOutcome::Duplicate => {
                self.candidates += 1;
                self.valid += 1;
            }
            IngestOutcome::Added => {
                self.candidates += 1;
                self.valid += 1;
                self.added += 1;
            }
        }
    }
}

/// The set of normalized domains accumulated over one run.
///
/// Members are always lower-case valid domains. Nothing is ever removed:
/// the set only grows while sources are ingested.
#[derive(Debug, Clone, Default)]
pub struct DomainSet {
    domains: HashSet<String>,
}

impl DomainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify, validate and insert a single raw line.
    pub fn ingest(&mut self, raw_line: &str) -> IngestOutcome {
        let Some(candidate) = classify(raw_line).candidate() else {
            return IngestOutcome::Skipped;
        };
        let Some(domain) = normalize_domain(candidate) else {
            return IngestOutcome::Rejected;
        };
        if self.domains.insert(domain) {
            IngestOutcome::Added
        } else {
            IngestOutcome::Duplicate
        }
    }

    /// Ingest every line of a fetched list body, in order.
    pub fn ingest_content(&mut self, content: &str) -> SourceStats {
        let mut stats = SourceStats {
            bytes: content.len(),
            ..SourceStats::default()
        };
        for line in split_lines(content) {
            stats.record(self.ingest(line));
        }
        stats
    }

    /// Union another set into this one.
    pub fn merge(&mut self, other: DomainSet) {
        self.domains.extend(other.domains);
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(&domain.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// All domains in ascending byte order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut domains: Vec<&str> = self.domains.iter().map(String::as_str).collect();
        domains.sort_unstable();
        domains
    }
}

impl<S: AsRef<str>> FromIterator<S> for DomainSet {
    /// Build a set by ingesting each item as a raw line.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = DomainSet::new();
        for line in iter {
            set.ingest(line.as_ref());
        }
        set
    }
}
