//! Registration and crop validation tests
//!
//! Property-based coverage for the shared validation helpers backing the
//! registration and crop entry forms.

use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::types::CropCategory;
use shared::validation::{
    validate_indian_phone, validate_indian_state, validate_price_per_kg, validate_quantity_kg,
    INDIAN_STATES,
};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate valid 10-digit Indian mobile numbers (leading digit 6-9)
fn valid_mobile_strategy() -> impl Strategy<Value = String> {
    (6..=9u32, 0..=999_999_999u32).prop_map(|(lead, rest)| format!("{}{:09}", lead, rest))
}

/// Generate phone-like strings that are too short to be mobile numbers
fn short_number_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,9}"
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Any 10-digit number with a valid leading digit is accepted as-is
    #[test]
    fn test_valid_mobiles_accepted(phone in valid_mobile_strategy()) {
        prop_assert!(validate_indian_phone(&phone).is_ok());
    }

    /// Trunk and country-code prefixes are normalized away
    #[test]
    fn test_prefixed_mobiles_accepted(phone in valid_mobile_strategy()) {
        prop_assert!(validate_indian_phone(&format!("0{}", phone)).is_ok(), "trunk-prefixed mobile rejected");
        prop_assert!(validate_indian_phone(&format!("+91{}", phone)).is_ok(), "+91-prefixed mobile rejected");
        prop_assert!(validate_indian_phone(&format!("91{}", phone)).is_ok(), "91-prefixed mobile rejected");
    }

    /// Formatting characters do not affect acceptance
    #[test]
    fn test_dashed_mobiles_accepted(phone in valid_mobile_strategy()) {
        let dashed = format!("{}-{}-{}", &phone[..3], &phone[3..6], &phone[6..]);
        prop_assert!(validate_indian_phone(&dashed).is_ok());
    }

    #[test]
    fn test_short_numbers_rejected(digits in short_number_strategy()) {
        prop_assert!(validate_indian_phone(&digits).is_err());
    }

    /// Mobile numbers never start with 0-5
    #[test]
    fn test_bad_leading_digit_rejected(lead in 0..=5u32, rest in 0..=999_999_999u32) {
        let phone = format!("{}{:09}", lead, rest);
        prop_assert!(validate_indian_phone(&phone).is_err());
    }

    #[test]
    fn test_positive_quantities_accepted(raw in 1..=100_000_000i64) {
        prop_assert!(validate_quantity_kg(Decimal::new(raw, 2)).is_ok());
    }

    #[test]
    fn test_non_positive_quantities_rejected(raw in 0..=100_000_000i64) {
        prop_assert!(validate_quantity_kg(Decimal::new(-raw, 2)).is_err());
    }

    #[test]
    fn test_negative_prices_rejected(raw in 1..=100_000_000i64) {
        prop_assert!(validate_price_per_kg(Decimal::new(-raw, 2)).is_err());
        prop_assert!(validate_price_per_kg(Decimal::new(raw, 2)).is_ok());
    }

    /// Every known state is accepted regardless of casing
    #[test]
    fn test_states_accept_any_casing(idx in 0..INDIAN_STATES.len()) {
        let state = INDIAN_STATES[idx];
        prop_assert!(validate_indian_state(state).is_ok());
        prop_assert!(validate_indian_state(&state.to_uppercase()).is_ok());
        prop_assert!(validate_indian_state(&state.to_lowercase()).is_ok());
    }
}

// ============================================================================
// Unit Tests: Crop Categories
// ============================================================================

#[cfg(test)]
mod category_tests {
    use super::*;

    #[test]
    fn test_category_wire_names_are_stable() {
        // The database stores these strings; renaming a variant without a
        // data migration would orphan existing rows
        let names: Vec<&str> = CropCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            ["cereal", "pulse", "vegetable", "fruit", "spice", "oilseed", "other"]
        );
    }

    #[test]
    fn test_category_labels_render_for_forms() {
        for category in CropCategory::ALL {
            assert!(!category.label().is_empty());
        }
    }
}
