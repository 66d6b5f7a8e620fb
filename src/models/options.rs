//! Options controlling how sums are computed and substrings compared

use serde::{Serialize, Deserialize};
use crate::constants::defaults;
use crate::models::tokens::TokenDigits;

/// Matching options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOptions {
    /// Tokens that contribute a fixed value to the digit sum
    #[serde(default)]
    pub token_to_digit: TokenDigits,
    /// Whether plain decimal digits contribute their face value
    #[serde(default = "defaults::sum_plain_digits")]
    pub sum_plain_digits: bool,
    /// Whether an expected substring may be cut short by the end of the text
    #[serde(default = "defaults::allow_bleeding")]
    pub allow_bleeding: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            token_to_digit: TokenDigits::new(),
            sum_plain_digits: defaults::DEFAULT_SUM_PLAIN_DIGITS,
            allow_bleeding: defaults::DEFAULT_ALLOW_BLEEDING,
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token substitution
    pub fn with_token(mut self, token: impl Into<String>, value: u64) -> Self {
        self.token_to_digit.insert(token, value);
        self
    }

    pub fn with_sum_plain_digits(mut self, sum_plain_digits: bool) -> Self {
        self.sum_plain_digits = sum_plain_digits;
        self
    }

    pub fn with_allow_bleeding(mut self, allow_bleeding: bool) -> Self {
        self.allow_bleeding = allow_bleeding;
        self
    }
}
