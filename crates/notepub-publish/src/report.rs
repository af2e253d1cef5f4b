//! Outcome of a materialization run.

use std::fmt;
use std::path::PathBuf;

/// An entry that could not be linked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLink {
    /// Source path that was meant to be linked.
    pub source: PathBuf,
    /// Why it was skipped.
    pub reason: String,
}

/// Counts and skipped entries of one linking pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Links created.
    pub linked: usize,
    /// Candidates considered.
    pub total: usize,
    /// Candidates that were not linked.
    pub skipped: Vec<SkippedLink>,
}

impl LinkReport {
    /// Start a report for `total` candidates.
    pub fn with_total(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Record a created link.
    pub fn record_linked(&mut self) {
        self.linked += 1;
    }

    /// Record a skipped candidate.
    pub fn record_skipped(&mut self, source: impl Into<PathBuf>, reason: impl Into<String>) {
        self.skipped.push(SkippedLink {
            source: source.into(),
            reason: reason.into(),
        });
    }

    /// True when every candidate was linked.
    pub fn is_complete(&self) -> bool {
        self.linked == self.total
    }
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.linked, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = LinkReport::with_total(3);
        report.record_linked();
        report.record_linked();
        report.record_skipped("/notes/assets/x.png", "source not found");

        assert_eq!(report.to_string(), "2/3");
        assert!(!report.is_complete());
        assert_eq!(report.skipped[0].reason, "source not found");
    }

    #[test]
    fn test_empty_report_is_complete() {
        let report = LinkReport::default();
        assert!(report.is_complete());
        assert_eq!(report.to_string(), "0/0");
    }
}
