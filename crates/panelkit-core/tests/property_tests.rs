//! Property-based tests for the style composer
//!
//! Uses proptest to check the ordering and presence rules of class
//! composition and the shape of dimension and grid values.

use panelkit_core::{compose_class_name, grid_columns, to_dimension, DEFAULT_MIN_CARD_WIDTH};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// A single class token: no whitespace, never empty
fn token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_-]{0,15}").expect("valid regex")
}

fn tokens_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token_strategy(), 0..max)
}

fn conditionals_strategy(max: usize) -> impl Strategy<Value = Vec<(bool, String)>> {
    prop::collection::vec((any::<bool>(), token_strategy()), 0..max)
}

fn as_strs(tokens: &[String]) -> Vec<&str> {
    tokens.iter().map(String::as_str).collect()
}

fn as_pairs(conditionals: &[(bool, String)]) -> Vec<(bool, &str)> {
    conditionals
        .iter()
        .map(|(on, token)| (*on, token.as_str()))
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Output starts with the base tokens, in order
    #[test]
    fn starts_with_base_tokens(
        base in tokens_strategy(8),
        conditionals in conditionals_strategy(8),
    ) {
        let class = compose_class_name(&as_strs(&base), &as_pairs(&conditionals), None);
        let out: Vec<&str> = class.split(' ').filter(|t| !t.is_empty()).collect();
        let expected = as_strs(&base);
        prop_assert!(out.len() >= expected.len());
        prop_assert_eq!(&out[..expected.len()], &expected[..]);
    }

    /// Output is exactly base ++ enabled conditionals ++ extra
    #[test]
    fn output_is_ordered_concatenation(
        base in tokens_strategy(6),
        conditionals in conditionals_strategy(6),
        extra in prop::option::of(token_strategy()),
    ) {
        let class = compose_class_name(
            &as_strs(&base),
            &as_pairs(&conditionals),
            extra.as_deref(),
        );

        let mut expected: Vec<&str> = as_strs(&base);
        expected.extend(conditionals.iter().filter(|(on, _)| *on).map(|(_, t)| t.as_str()));
        expected.extend(extra.as_deref());
        prop_assert_eq!(class, expected.join(" "));
    }

    /// A token whose flag is false never appears, unless it also appears elsewhere
    #[test]
    fn disabled_tokens_never_appear(
        base in tokens_strategy(4),
        disabled in token_strategy(),
    ) {
        prop_assume!(!base.contains(&disabled));
        let class = compose_class_name(&as_strs(&base), &[(false, disabled.as_str())], None);
        prop_assert!(!class.split(' ').any(|t| t == disabled));
    }

    /// Padding around the extra class never leaks into the output
    #[test]
    fn extra_is_trimmed(
        base in tokens_strategy(4),
        extra in token_strategy(),
        left in 0usize..4,
        right in 0usize..4,
    ) {
        let padded = format!("{}{}{}", " ".repeat(left), extra, " ".repeat(right));
        let class = compose_class_name(&as_strs(&base), &[], Some(padded.as_str()));
        prop_assert_eq!(class.trim(), class.as_str());
        prop_assert!(class.ends_with(extra.as_str()));
        prop_assert!(!class.contains("  "));
    }

    /// Integers always gain a px suffix
    #[test]
    fn integer_dimensions_have_px(value in any::<i32>()) {
        prop_assert_eq!(to_dimension(value), format!("{value}px"));
    }

    /// Wide integers keep every digit
    #[test]
    fn wide_integer_dimensions_are_exact(value in any::<u64>()) {
        prop_assert_eq!(to_dimension(value), format!("{value}px"));
    }

    /// Strings are never altered
    #[test]
    fn string_dimensions_pass_through(value in ".{0,32}") {
        prop_assert_eq!(to_dimension(value.as_str()), value);
    }

    /// Column counts produce a fixed repeat, regardless of min card width
    #[test]
    fn column_count_wins(columns in 1u32..64, width in prop::option::of("[0-9]{1,3}px")) {
        prop_assert_eq!(
            grid_columns(Some(columns), width.as_deref()),
            format!("repeat({columns}, 1fr)")
        );
    }
}

#[test]
fn empty_request_with_padded_extra() {
    assert_eq!(compose_class_name(&[], &[], Some("  x  ")), "x");
}

#[test]
fn default_grid_is_stable() {
    let first = grid_columns(None, None);
    let second = grid_columns(None, None);
    assert_eq!(first, second);
    assert_eq!(
        first,
        format!("repeat(auto-fit, minmax({DEFAULT_MIN_CARD_WIDTH}, 1fr))")
    );
}
