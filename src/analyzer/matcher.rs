//! Forward scan matching required substrings at digit sums

use log::{debug, trace};

use crate::analyzer::digit_sum::{DigitSummer, TokenDigitSummer};
use crate::analyzer::report::{MatchReport, Mismatch, SumMatch};
use crate::models::{MatchOptions, RequiredSubstrings};

/// Checks that a text carries each required substring immediately after
/// the first prefix whose digit sum equals the substring's key.
///
/// The scan is a single forward pass. Each sum fires at most once, at its
/// first occurrence, and the first mismatch ends the scan for good: later
/// prefixes are not consulted even if they would have hit the remaining
/// sums. The caller's [`RequiredSubstrings`] is only borrowed.
#[derive(Debug, Clone, Default)]
pub struct SubstringAtSumMatcher<S = TokenDigitSummer> {
    summer: S,
}

impl SubstringAtSumMatcher<TokenDigitSummer> {
    /// Create a matcher using the default digit summer
    pub fn new() -> Self {
        Self { summer: TokenDigitSummer }
    }
}

impl<S: DigitSummer> SubstringAtSumMatcher<S> {
    /// Create a matcher using a custom digit summer
    pub fn with_summer(summer: S) -> Self {
        Self { summer }
    }

    /// True when every required substring is found at its sum
    pub fn matches(&self, text: &str, required: &RequiredSubstrings, options: &MatchOptions) -> bool {
        self.check(text, required, options).is_match()
    }

    /// Scan `text` and report what was confirmed, what failed and what is left
    pub fn check(&self, text: &str, required: &RequiredSubstrings, options: &MatchOptions) -> MatchReport {
        if required.is_empty() {
            return MatchReport::default();
        }
        if text.is_empty() {
            return MatchReport {
                unmet: required.sums(),
                ..MatchReport::default()
            };
        }

        let mut pending = required.clone();
        let mut report = MatchReport::default();

        // Byte offset of every char boundary, including the end of the text
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_len = bounds.len() - 1;

        for i in 1..=char_len {
            let prefix = &text[..bounds[i]];
            let sum = self.summer.digit_sum(prefix, &options.token_to_digit, options.sum_plain_digits);
            report.prefixes_scanned = i;
            trace!("prefix of {} chars sums to {}", i, sum);

            let Some(expected) = pending.get(sum) else {
                continue;
            };

            let remaining = char_len - i;
            let expected = if options.allow_bleeding {
                take_chars(expected, remaining)
            } else {
                expected
            };

            let end = (i + expected.chars().count()).min(char_len);
            let actual = &text[bounds[i]..bounds[end]];

            if expected != actual {
                debug!(
                    "sum {} at char {} expected {:?}, found {:?}; stopping scan",
                    sum, i, expected, actual
                );
                report.mismatch = Some(Mismatch {
                    sum,
                    position: i,
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
                break;
            }

            debug!("sum {} at char {} matched {:?}", sum, i, expected);
            report.matched.push(SumMatch {
                sum,
                position: i,
                expected: expected.to_string(),
            });
            pending.remove(sum);

            if pending.is_empty() {
                break;
            }
        }

        report.unmet = pending.sums();
        report
    }
}

/// First `n` characters of `s`
fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((b, _)) => &s[..b],
        None => s,
    }
}
