#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::errors::SumsError;

    #[test]
    fn test_options_default() {
        let options = MatchOptions::default();

        assert!(options.token_to_digit.is_empty());
        assert!(options.sum_plain_digits);
        assert!(!options.allow_bleeding);
    }

    #[test]
    fn test_options_builder() {
        let options = MatchOptions::new()
            .with_token("!!!", 4)
            .with_token("@", 5)
            .with_sum_plain_digits(false)
            .with_allow_bleeding(true);

        assert_eq!(options.token_to_digit.get("!!!"), Some(4));
        assert_eq!(options.token_to_digit.get("@"), Some(5));
        assert_eq!(options.token_to_digit.get("#"), None);
        assert!(!options.sum_plain_digits);
        assert!(options.allow_bleeding);
    }

    #[test]
    fn test_longest_prefix_match_prefers_longer_token() {
        let tokens: TokenDigits = [("!", 1), ("!!", 7), ("", 9)].into_iter().collect();

        assert_eq!(tokens.longest_prefix_match("!!a"), Some(("!!", 7)));
        assert_eq!(tokens.longest_prefix_match("!a"), Some(("!", 1)));
        assert_eq!(tokens.longest_prefix_match("a!!"), None);
    }

    #[test]
    fn test_required_substrings_insert_remove() {
        let mut required = RequiredSubstrings::new();
        assert!(required.is_empty());

        assert_eq!(required.insert(6, "a"), None);
        assert_eq!(required.insert(6, "abc"), Some("a".to_string()));
        required.insert(1, "z");

        assert_eq!(required.len(), 2);
        assert!(required.contains_sum(6));
        assert_eq!(required.get(6), Some("abc"));
        assert_eq!(required.sums(), vec![1, 6]);

        assert_eq!(required.remove(6), Some("abc".to_string()));
        assert!(!required.contains_sum(6));
        assert_eq!(required.remove(6), None);
    }

    #[test]
    fn test_ruleset_from_json_with_defaults() {
        let rules = RuleSet::from_json_str(r#"{"required": {"6": "a", "10": "xyz"}}"#).unwrap();

        assert_eq!(rules.required.get(6), Some("a"));
        assert_eq!(rules.required.get(10), Some("xyz"));
        assert_eq!(rules.options, MatchOptions::default());
    }

    #[test]
    fn test_ruleset_from_json_with_options() {
        let json = r#"{
            "required": {"3": "a"},
            "options": {"tokenToDigit": {"!": 2}, "allowBleeding": true}
        }"#;
        let rules = RuleSet::from_json_str(json).unwrap();

        assert_eq!(rules.options.token_to_digit.get("!"), Some(2));
        assert!(rules.options.sum_plain_digits);
        assert!(rules.options.allow_bleeding);
        assert!(rules.matches("1!a"));
    }

    #[test]
    fn test_ruleset_rejects_empty_token() {
        let json = r#"{"required": {"3": "a"}, "options": {"tokenToDigit": {"": 2}}}"#;
        let err = RuleSet::from_json_str(json).unwrap_err();

        assert!(matches!(err, SumsError::EmptyToken { value: 2 }));
    }

    #[test]
    fn test_ruleset_rejects_non_numeric_sum() {
        let err = RuleSet::from_json_str(r#"{"required": {"six": "a"}}"#).unwrap_err();
        assert!(matches!(err, SumsError::Json(_)));
    }

    #[test]
    fn test_ruleset_load_missing_file() {
        let err = RuleSet::load(std::path::Path::new("/nonexistent/rules.json")).unwrap_err();

        match err {
            SumsError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {}", other),
        }
    }
}
