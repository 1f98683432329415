//! Property-based tests for the field masks and date conversion.
//!
//! These cover the invariants every mask must hold regardless of input:
//! - Idempotence: mask(mask(x)) == mask(x)
//! - Canonical stability: canonicalize(mask(x)) == canonicalize(x) within the field maximum
//! - Truncation: digits past the field maximum never reach the output
//! - Round trip: masked birth dates convert to the wire date built from the same digits

use proptest::prelude::*;
use scp_core::dates::{to_display_date_time, to_wire_date, to_wire_date_time};
use scp_core::mask::{canonicalize, mask_field};
use scp_core::FieldKind;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn digit_kind_strategy() -> impl Strategy<Value = FieldKind> {
    prop_oneof![
        Just(FieldKind::Identifier),
        Just(FieldKind::Phone),
        Just(FieldKind::HealthCard),
        Just(FieldKind::BirthDate),
        Just(FieldKind::DateTime),
    ]
}

fn digits_strategy(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('0', '9'), 0..=max)
        .prop_map(|chars| chars.into_iter().collect())
}

fn noisy_input_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9 ./()\\-a-zA-Z]{0,30}").unwrap()
}

/// Calendar-plausible DD, MM and YYYY digit groups.
fn date_parts_strategy() -> impl Strategy<Value = (u32, u32, u32)> {
    (1u32..=28, 1u32..=12, 1900u32..=2099)
}

// =============================================================================
// MASK PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn masking_is_idempotent(kind in digit_kind_strategy(), raw in noisy_input_strategy()) {
        let once = mask_field(kind, &raw);
        let twice = mask_field(kind, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn masking_preserves_canonical_digits(
        kind in digit_kind_strategy(),
        digits in digits_strategy(8),
    ) {
        // Eight digits fit every digit field.
        prop_assert_eq!(canonicalize(&mask_field(kind, &digits)), canonicalize(&digits));
    }

    #[test]
    fn masking_never_keeps_more_than_the_maximum(
        kind in digit_kind_strategy(),
        digits in digits_strategy(40),
    ) {
        let max = kind.max_digits().unwrap();
        let kept = canonicalize(&mask_field(kind, &digits));
        prop_assert!(kept.len() <= max);
        prop_assert!(digits.starts_with(&kept));
    }

    #[test]
    fn identifier_uses_only_the_first_eleven_digits(digits in digits_strategy(30)) {
        prop_assume!(digits.len() >= 11);
        let masked = mask_field(FieldKind::Identifier, &digits);
        prop_assert_eq!(masked, mask_field(FieldKind::Identifier, &digits[..11]));
    }

    #[test]
    fn text_fields_pass_through(raw in noisy_input_strategy()) {
        prop_assert_eq!(mask_field(FieldKind::Text, &raw), raw);
    }
}

// =============================================================================
// DATE PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn masked_birth_date_converts_to_wire((day, month, year) in date_parts_strategy()) {
        let raw = format!("{day:02}{month:02}{year:04}");
        let masked = mask_field(FieldKind::BirthDate, &raw);
        prop_assert_eq!(
            to_wire_date(&masked).unwrap(),
            format!("{year:04}-{month:02}-{day:02}")
        );
    }

    #[test]
    fn date_time_survives_wire_and_back(
        (day, month, year) in date_parts_strategy(),
        hour in 0u32..24,
        minute in 0u32..60,
    ) {
        let display = format!("{day:02}/{month:02}/{year:04} {hour:02}:{minute:02}");
        let wire = to_wire_date_time(&display).unwrap();
        prop_assert!(wire.ends_with(":00"));
        prop_assert_eq!(to_display_date_time(&wire), display);
    }

    #[test]
    fn short_birth_dates_never_convert(digits in digits_strategy(7)) {
        let masked = mask_field(FieldKind::BirthDate, &digits);
        prop_assert!(to_wire_date(&masked).is_err());
    }
}
