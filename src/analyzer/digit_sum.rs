//! Digit summing with token substitution

use crate::models::{MatchOptions, TokenDigits};

/// Computes the digit sum of a string.
///
/// The matcher treats this as a black box and calls it once per prefix, so
/// implementations must be pure: the same input always yields the same sum.
pub trait DigitSummer {
    fn digit_sum(&self, text: &str, tokens: &TokenDigits, sum_plain_digits: bool) -> u64;
}

/// Default summer.
///
/// Walks `text` left to right. Where a configured token starts, the longest
/// one is consumed and its value added; otherwise an ASCII digit adds its
/// face value when `sum_plain_digits` is set. Everything else adds nothing.
/// A token cut off by the end of `text` is not counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenDigitSummer;

impl DigitSummer for TokenDigitSummer {
    fn digit_sum(&self, text: &str, tokens: &TokenDigits, sum_plain_digits: bool) -> u64 {
        let mut sum: u64 = 0;
        let mut pos = 0;

        while let Some(c) = text[pos..].chars().next() {
            if let Some((token, value)) = tokens.longest_prefix_match(&text[pos..]) {
                sum = sum.saturating_add(value);
                pos += token.len();
                continue;
            }

            if sum_plain_digits && c.is_ascii_digit() {
                sum = sum.saturating_add(u64::from(c as u8 - b'0'));
            }
            pos += c.len_utf8();
        }

        sum
    }
}

/// Digit sum of `text` under `options`, using [`TokenDigitSummer`]
pub fn digit_sum(text: &str, options: &MatchOptions) -> u64 {
    TokenDigitSummer.digit_sum(text, &options.token_to_digit, options.sum_plain_digits)
}
