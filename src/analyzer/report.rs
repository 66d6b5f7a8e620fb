//! Outcome of a single scan

use serde::{Serialize, Deserialize};

/// A requirement confirmed during the scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumMatch {
    /// Digit sum of the prefix
    pub sum: u64,
    /// Character offset where the substring starts
    pub position: usize,
    /// Substring that was found (after any bleeding truncation)
    pub expected: String,
}

/// The requirement that stopped the scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    /// Digit sum of the prefix
    pub sum: u64,
    /// Character offset where the substring should have started
    pub position: usize,
    /// Substring that was required (after any bleeding truncation)
    pub expected: String,
    /// Text actually found there
    pub actual: String,
}

/// Result of checking a text against its required substrings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Requirements confirmed, in scan order
    pub matched: Vec<SumMatch>,
    /// Set when a requirement failed and the scan stopped there
    pub mismatch: Option<Mismatch>,
    /// Sums whose requirement was never confirmed, ascending
    pub unmet: Vec<u64>,
    /// Number of prefixes whose sum was computed
    pub prefixes_scanned: usize,
}

impl MatchReport {
    /// True when every requirement was confirmed
    pub fn is_match(&self) -> bool {
        self.unmet.is_empty()
    }
}
