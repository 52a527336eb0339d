//! Property-based tests for the validation context

use fieldcheck::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_apply_ok_matches_validator(value in any::<i32>(), bound in any::<i32>()) {
        let mut v = Validation::new();
        let validator = Min(bound);

        let result = v.apply(&validator, &value);

        prop_assert_eq!(result.is_ok(), validator.is_satisfied(&value));
        prop_assert_eq!(v.len(), if result.is_ok() { 0 } else { 1 });
    }

    #[test]
    fn prop_check_records_at_most_one_error(
        value in -100i32..100,
        lo in -100i32..100,
        hi in -100i32..100,
    ) {
        let mut v = Validation::new();
        let result = v.check(&value, &[&Min(lo), &Max(hi), &Range::new(lo, hi)]);

        prop_assert!(v.len() <= 1);
        prop_assert_eq!(result.is_ok(), v.is_empty());
    }

    #[test]
    fn prop_check_returns_first_failing_result(
        value in -100i32..100,
        lo in -100i32..100,
        hi in -100i32..100,
    ) {
        let mut v = Validation::new();
        let result = v.check(&value, &[&Min(lo), &Max(hi)]);

        let expected = if value < lo {
            Some(format!("Minimum is {}", lo))
        } else if value > hi {
            Some(format!("Maximum is {}", hi))
        } else {
            None
        };
        prop_assert_eq!(result.error_message(), expected);
    }

    #[test]
    fn prop_errors_follow_call_order(values in prop::collection::vec(-10i32..10, 0..50)) {
        let mut v = Validation::new();
        let mut expected = Vec::new();

        for (i, value) in values.iter().enumerate() {
            if v.apply(&Min(0), value).is_err() {
                expected.push(format!("value {} is negative", i));
                v.error(format!("value {} is negative", i));
            }
        }

        let negatives = values.iter().filter(|n| **n < 0).count();
        prop_assert_eq!(v.len(), negatives * 2);
        let custom: Vec<String> = v.messages().into_iter().skip(1).step_by(2).collect();
        prop_assert_eq!(custom, expected);
    }

    #[test]
    fn prop_override_visible_through_context(message in ".*") {
        let mut v = Validation::new();
        let result = v.required("");
        result.message(message.clone());

        prop_assert_eq!(result.error_message(), Some(message.clone()));
        prop_assert_eq!(v.messages(), vec![message]);
    }

    #[test]
    fn prop_override_on_success_has_no_effect(message in ".*") {
        let mut v = Validation::new();
        let result = v.required("present");
        result.message(message);

        prop_assert!(result.is_ok());
        prop_assert!(!v.has_errors());
    }

    #[test]
    fn prop_clear_always_empties(failures in 0usize..20) {
        let mut v = Validation::new();
        for _ in 0..failures {
            v.max(1, 0);
        }
        prop_assert_eq!(v.len(), failures);

        v.clear();
        prop_assert!(!v.has_errors());
        prop_assert_eq!(v.len(), 0);
        v.clear();
        prop_assert_eq!(v.len(), 0);
    }

    #[test]
    fn prop_display_is_one_line_per_error(count in 0usize..20) {
        let mut v = Validation::new();
        for i in 0..count {
            v.error(format!("e{}", i));
        }

        let dump = v.to_string();
        prop_assert_eq!(dump.lines().count(), count);
        prop_assert_eq!(dump.is_empty(), count == 0);
        prop_assert!(count == 0 || dump.ends_with('\n'));
    }

    #[test]
    fn prop_size_validators_agree_with_char_count(s in "\\PC{0,20}", n in 0usize..25) {
        let chars = s.chars().count();
        prop_assert_eq!(MinSize(n).is_satisfied(s.as_str()), chars >= n);
        prop_assert_eq!(MaxSize(n).is_satisfied(s.as_str()), chars <= n);
        prop_assert_eq!(Length(n).is_satisfied(s.as_str()), chars == n);
    }
}
