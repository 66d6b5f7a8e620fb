//! Rule sets loaded from JSON

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use log::debug;

use crate::analyzer::{MatchReport, SubstringAtSumMatcher};
use crate::errors::{SumsError, SumsResult};
use crate::models::options::MatchOptions;
use crate::models::requirements::RequiredSubstrings;

/// Required substrings together with the options to check them under
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Expected substrings keyed by digit sum
    pub required: RequiredSubstrings,
    /// Matching options; omitted fields take their defaults
    #[serde(default)]
    pub options: MatchOptions,
}

impl RuleSet {
    pub fn new(required: RequiredSubstrings, options: MatchOptions) -> Self {
        Self { required, options }
    }

    /// Parse and validate a rule set from a JSON document
    pub fn from_json_str(json: &str) -> SumsResult<Self> {
        let rules: RuleSet = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Read, parse and validate a rule set from a JSON file
    pub fn load(path: &Path) -> SumsResult<Self> {
        let json = fs::read_to_string(path)?;

        let rules = Self::from_json_str(&json)?;
        debug!(
            "Loaded {} required substrings and {} tokens from {}",
            rules.required.len(),
            rules.options.token_to_digit.len(),
            path.display()
        );
        Ok(rules)
    }

    /// Reject configurations the digit summer cannot honour
    pub fn validate(&self) -> SumsResult<()> {
        if let Some(value) = self.options.token_to_digit.get("") {
            return Err(SumsError::EmptyToken { value });
        }
        Ok(())
    }

    /// Run the matcher over `text` with these rules
    pub fn check(&self, text: &str) -> MatchReport {
        SubstringAtSumMatcher::new().check(text, &self.required, &self.options)
    }

    pub fn matches(&self, text: &str) -> bool {
        SubstringAtSumMatcher::new().matches(text, &self.required, &self.options)
    }
}
