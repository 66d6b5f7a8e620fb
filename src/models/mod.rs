//! Data models for required substrings and matching options

pub mod tokens;
pub mod requirements;
pub mod options;
pub mod ruleset;
#[cfg(test)]
mod tests;

pub use self::tokens::TokenDigits;
pub use self::requirements::RequiredSubstrings;
pub use self::options::MatchOptions;
pub use self::ruleset::RuleSet;
