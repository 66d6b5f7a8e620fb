//! Token to digit-value substitutions

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

/// Multi-character tokens that count as a fixed value when summing digits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDigits {
    tokens: BTreeMap<String, u64>,
}

impl TokenDigits {
    /// Create an empty token map
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `token` to `value`, returning the value it replaced
    pub fn insert(&mut self, token: impl Into<String>, value: u64) -> Option<u64> {
        self.tokens.insert(token.into(), value)
    }

    /// Value mapped to `token`
    pub fn get(&self, token: &str) -> Option<u64> {
        self.tokens.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.tokens.iter().map(|(t, &v)| (t.as_str(), v))
    }

    /// Longest non-empty token that `rest` starts with, with its value.
    ///
    /// Keys are unique, so the longest match is unambiguous.
    pub fn longest_prefix_match(&self, rest: &str) -> Option<(&str, u64)> {
        self.tokens
            .iter()
            .filter(|(token, _)| !token.is_empty() && rest.starts_with(token.as_str()))
            .max_by_key(|(token, _)| token.len())
            .map(|(token, &value)| (token.as_str(), value))
    }
}

impl From<BTreeMap<String, u64>> for TokenDigits {
    fn from(tokens: BTreeMap<String, u64>) -> Self {
        Self { tokens }
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for TokenDigits {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
