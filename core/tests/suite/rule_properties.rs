//! Property-based tests for rule validation.

use proptest::prelude::*;

use arrkit_core::{ErrorCode, RuleBook};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn validation_is_deterministic(input in ".{0,16}") {
        let book = RuleBook::password_policy();
        let first = book.validate_str(&input);
        let second = book.validate_str(&input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn codes_are_never_repeated(input in "[ a-zA-Z0-9.]{0,24}") {
        let report = RuleBook::password_policy().validate_str(&input);
        let mut codes = report.errors().to_vec();
        let before = codes.len();
        codes.sort_by_key(|code| code.as_str());
        codes.dedup();
        prop_assert_eq!(codes.len(), before);
    }

    #[test]
    fn many_spaces_report_once(word in "[a-z]{0,8}", spaces in 1usize..10) {
        let input = format!("{word}{}", " ".repeat(spaces));
        let report = RuleBook::password_policy().validate_str(&input);
        prop_assert_eq!(report.errors()[0], ErrorCode::SpacesNotAllowed);
        prop_assert_eq!(
            report.errors().iter().filter(|c| **c == ErrorCode::SpacesNotAllowed).count(),
            1
        );
    }

    #[test]
    fn outcomes_match_reported_codes(input in "[ a-zA-Z0-9.*]{0,24}") {
        let report = RuleBook::password_policy().validate_str(&input);
        for outcome in report.must_be() {
            prop_assert_eq!(!outcome.satisfied, report.errors().contains(&outcome.code));
        }
        for outcome in report.must_not_be() {
            prop_assert_eq!(outcome.satisfied, report.errors().contains(&outcome.code));
        }
        prop_assert_eq!(report.is_valid(), report.message().is_empty());
    }
}
