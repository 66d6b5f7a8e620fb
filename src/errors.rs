//! Error handling for rule-set loading and the command-line front end.
//!
//! Matching itself never fails: a string either carries its required
//! substrings or it does not. Errors only arise around it, when reading
//! and validating rule sets.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum SumsError {
    /// Errors related to file I/O, such as a missing rules file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON, or JSON of the wrong shape for a rule set.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A token in `tokenToDigit` is the empty string and could never be consumed.
    #[error("Token map contains an empty token (value {value})")]
    EmptyToken {
        /// Value that was mapped to the empty token.
        value: u64,
    },
}

/// Result type alias using [`SumsError`].
pub type SumsResult<T> = Result<T, SumsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let io: SumsError = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();
        assert_eq!(io.to_string(), "I/O error: no such file");

        let empty = SumsError::EmptyToken { value: 7 };
        assert_eq!(empty.to_string(), "Token map contains an empty token (value 7)");
    }
}
