//! Comprehensive tests for domain_claims validation

use domain_claims::{ClaimValidator, NewClaim, ValidationError, SUGGESTED_VEHICLE_CLASSES};
use proptest::prelude::*;
use rust_decimal_macros::dec;

// ============================================================================
// Date Tests
// ============================================================================

mod date_tests {
    use super::*;

    #[test]
    fn test_valid_date_accepted() {
        assert!(ClaimValidator::validate_date("2024-01-01").is_ok());
    }

    #[test]
    fn test_leap_day_accepted() {
        assert!(ClaimValidator::validate_date("2024-02-29").is_ok());
    }

    #[test]
    fn test_non_leap_year_february_29_rejected() {
        assert!(matches!(
            ClaimValidator::validate_date("2023-02-29"),
            Err(ValidationError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_month_13_rejected() {
        assert!(matches!(
            ClaimValidator::validate_date("2024-13-01"),
            Err(ValidationError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_day_month_year_order_rejected() {
        assert!(matches!(
            ClaimValidator::validate_date("01-01-2024"),
            Err(ValidationError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_alternate_separator_rejected() {
        assert!(matches!(
            ClaimValidator::validate_date("2024/01/01"),
            Err(ValidationError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_trailing_text_rejected() {
        assert!(matches!(
            ClaimValidator::validate_date("2024-01-01 noon"),
            Err(ValidationError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_non_padded_month_and_day_rejected() {
        assert!(matches!(
            ClaimValidator::validate_date("2024-6-1"),
            Err(ValidationError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_empty_date_rejected() {
        assert!(matches!(
            ClaimValidator::validate_date(""),
            Err(ValidationError::InvalidDateFormat(_))
        ));
    }
}

// ============================================================================
// Amount Tests
// ============================================================================

mod amount_tests {
    use super::*;

    #[test]
    fn test_integer_amount() {
        assert_eq!(ClaimValidator::validate_amount("100"), Ok(dec!(100)));
    }

    #[test]
    fn test_fractional_amount() {
        assert_eq!(ClaimValidator::validate_amount("1250.50"), Ok(dec!(1250.50)));
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        assert_eq!(ClaimValidator::validate_amount(" 250 "), Ok(dec!(250)));
    }

    #[test]
    fn test_zero_is_non_positive() {
        assert_eq!(
            ClaimValidator::validate_amount("0"),
            Err(ValidationError::NonPositiveAmount(dec!(0)))
        );
    }

    #[test]
    fn test_negative_is_non_positive() {
        assert_eq!(
            ClaimValidator::validate_amount("-5"),
            Err(ValidationError::NonPositiveAmount(dec!(-5)))
        );
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(matches!(
            ClaimValidator::validate_amount("abc"),
            Err(ValidationError::InvalidAmountFormat(_))
        ));
    }

    #[test]
    fn test_empty_amount_rejected() {
        assert!(matches!(
            ClaimValidator::validate_amount(""),
            Err(ValidationError::InvalidAmountFormat(_))
        ));
    }
}

// ============================================================================
// Required Field Tests
// ============================================================================

mod required_field_tests {
    use super::*;

    #[test]
    fn test_all_present() {
        assert!(ClaimValidator::validate_required_fields("2024-01-01", "Car", "100").is_ok());
    }

    #[test]
    fn test_each_field_required() {
        let cases = [("", "Car", "100"), ("2024-01-01", "", "100"), ("2024-01-01", "Car", "")];
        for (date, vehicle_class, amount) in cases {
            assert_eq!(
                ClaimValidator::validate_required_fields(date, vehicle_class, amount),
                Err(ValidationError::MissingRequiredField)
            );
        }
    }
}

// ============================================================================
// Composite Validation Tests
// ============================================================================

mod validate_claim_tests {
    use super::*;

    #[test]
    fn test_valid_claim_returns_amount() {
        assert_eq!(
            ClaimValidator::validate_claim("2024-01-01", "Truck", "999.99"),
            Ok(dec!(999.99))
        );
    }

    #[test]
    fn test_presence_checked_before_format() {
        assert_eq!(
            ClaimValidator::validate_claim("", "Car", "100"),
            Err(ValidationError::MissingRequiredField)
        );
    }

    #[test]
    fn test_date_checked_before_amount() {
        assert!(matches!(
            ClaimValidator::validate_claim("not-a-date", "Car", "abc"),
            Err(ValidationError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_any_suggested_vehicle_class_passes() {
        for class in SUGGESTED_VEHICLE_CLASSES {
            assert!(ClaimValidator::validate_claim("2024-01-01", class, "100").is_ok());
        }
    }

    #[test]
    fn test_arbitrary_vehicle_class_passes() {
        // the class list is a suggestion, not an enumeration
        assert!(ClaimValidator::validate_claim("2024-01-01", "Snowmobile", "100").is_ok());
    }

    #[test]
    fn test_new_claim_description_optional() {
        let claim = NewClaim::validated("2024-01-01", "Bus", "42", "").unwrap();
        assert_eq!(claim.description, "");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_well_formed_dates_validate(year in 1900i32..2100, month in 1u32..=12, day in 1u32..=28) {
        let text = format!("{year:04}-{month:02}-{day:02}");
        prop_assert!(ClaimValidator::validate_date(&text).is_ok());
    }

    #[test]
    fn prop_positive_integer_amounts_validate(amount in 1u64..1_000_000_000) {
        let parsed = ClaimValidator::validate_amount(&amount.to_string()).unwrap();
        prop_assert_eq!(parsed, rust_decimal::Decimal::from(amount));
    }

    #[test]
    fn prop_non_positive_integer_amounts_rejected(amount in 0i64..1_000_000) {
        let result = ClaimValidator::validate_amount(&(-amount).to_string());
        prop_assert!(matches!(result, Err(ValidationError::NonPositiveAmount(_))));
    }
}
