//! Digit summing and the substring-at-sum matcher

pub mod digit_sum;
pub mod matcher;
pub mod report;

pub use self::digit_sum::{digit_sum, DigitSummer, TokenDigitSummer};
pub use self::matcher::SubstringAtSumMatcher;
pub use self::report::{MatchReport, Mismatch, SumMatch};
