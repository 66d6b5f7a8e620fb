//! Checks that a string carries expected substrings at digit-sum positions.
//!
//! The text is scanned left to right. For each prefix a digit sum is
//! computed, counting plain decimal digits and optional multi-character
//! tokens with fixed values. When a prefix's sum has a required substring,
//! that substring must appear immediately after the prefix. This validates
//! checksum-like structures of the form "after the prefix summing to K, the
//! next literal text is S".
//!
//! ```
//! use sum_substrings::{has_required_substrings_at_sums, MatchOptions, RequiredSubstrings};
//!
//! let required: RequiredSubstrings = [(6, "a")].into_iter().collect();
//! assert!(has_required_substrings_at_sums("123a45", &required, &MatchOptions::default()));
//! ```
//!
//! Token maps with overlapping or conflicting entries are the caller's
//! responsibility; the longest token starting at a position always wins.

pub mod analyzer;
pub mod constants;
pub mod errors;
pub mod models;

pub use analyzer::{DigitSummer, MatchReport, SubstringAtSumMatcher, TokenDigitSummer};
pub use errors::{SumsError, SumsResult};
pub use models::{MatchOptions, RequiredSubstrings, RuleSet, TokenDigits};

/// True when `text` carries every required substring at its digit sum.
///
/// Returns `true` for an empty requirement set and `false` for an empty
/// `text` with requirements. `required` is never modified.
pub fn has_required_substrings_at_sums(
    text: &str,
    required: &RequiredSubstrings,
    options: &MatchOptions,
) -> bool {
    SubstringAtSumMatcher::new().matches(text, required, options)
}

/// Like [`has_required_substrings_at_sums`], but reports which requirements
/// were met and where the scan stopped
pub fn check_required_substrings_at_sums(
    text: &str,
    required: &RequiredSubstrings,
    options: &MatchOptions,
) -> MatchReport {
    SubstringAtSumMatcher::new().check(text, required, options)
}

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
