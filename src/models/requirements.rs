//! Required substrings keyed by digit sum

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

/// Substrings that must appear right after the prefix reaching each sum.
///
/// In JSON this is an object whose keys are decimal sums, e.g.
/// `{"6": "a", "10": "xyz"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredSubstrings {
    by_sum: BTreeMap<u64, String>,
}

impl RequiredSubstrings {
    /// Create an empty requirement set
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `substring` after the prefix whose sum is `sum`.
    ///
    /// Returns the substring previously required at that sum, if any.
    pub fn insert(&mut self, sum: u64, substring: impl Into<String>) -> Option<String> {
        self.by_sum.insert(sum, substring.into())
    }

    pub fn get(&self, sum: u64) -> Option<&str> {
        self.by_sum.get(&sum).map(String::as_str)
    }

    /// Drop the requirement at `sum`, returning its substring
    pub fn remove(&mut self, sum: u64) -> Option<String> {
        self.by_sum.remove(&sum)
    }

    pub fn contains_sum(&self, sum: u64) -> bool {
        self.by_sum.contains_key(&sum)
    }

    pub fn len(&self) -> usize {
        self.by_sum.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sum.is_empty()
    }

    /// Requirements in ascending order of sum
    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> + '_ {
        self.by_sum.iter().map(|(&s, sub)| (s, sub.as_str()))
    }

    /// Sums that still carry a requirement, ascending
    pub fn sums(&self) -> Vec<u64> {
        self.by_sum.keys().copied().collect()
    }
}

impl From<BTreeMap<u64, String>> for RequiredSubstrings {
    fn from(by_sum: BTreeMap<u64, String>) -> Self {
        Self { by_sum }
    }
}

impl<S: Into<String>> FromIterator<(u64, S)> for RequiredSubstrings {
    fn from_iter<I: IntoIterator<Item = (u64, S)>>(iter: I) -> Self {
        Self {
            by_sum: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}
