//! Claim field validation rules
//!
//! Pure input checking for the claim form, run before anything touches
//! storage. Fully deterministic and free of side effects, so the functions
//! are safe to call any number of times with the same input.
//!
//! # Validation Rules
//!
//! - Date, vehicle class, and amount are required; description is optional
//! - The date must be exactly `YYYY-MM-DD` and name a real calendar date
//! - The amount must parse as a base-10 decimal and be strictly positive
//!
//! The composite check runs in a fixed order (presence, then date, then
//! amount) so a blank form yields one unambiguous message rather than a
//! format complaint about an empty string.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validator for raw claim form fields
///
/// # Examples
///
/// ```rust
/// use domain_claims::ClaimValidator;
///
/// let amount = ClaimValidator::validate_claim("2024-03-15", "Car", "1250.50")?;
/// assert!(amount > rust_decimal::Decimal::ZERO);
/// # Ok::<(), domain_claims::ValidationError>(())
/// ```
pub struct ClaimValidator;

impl ClaimValidator {
    /// Validates that a date string is exactly `YYYY-MM-DD`
    ///
    /// The year must be 4 digits and the month and day zero-padded to 2;
    /// alternate separators, partial matches, and impossible calendar dates
    /// are all rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDateFormat`] with the offending text.
    pub fn validate_date(text: &str) -> Result<(), ValidationError> {
        let parsed = NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDateFormat(text.to_string()))?;

        // chrono accepts non-padded fields like `2024-1-1`; only the padded
        // form round-trips unchanged
        if parsed.format(DATE_FORMAT).to_string() != text {
            return Err(ValidationError::InvalidDateFormat(text.to_string()));
        }
        Ok(())
    }

    /// Validates and parses a claim amount
    ///
    /// Surrounding whitespace is tolerated. A leading sign parses but a
    /// non-positive value is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAmountFormat`] when the text is not
    /// a base-10 number, or [`ValidationError::NonPositiveAmount`] when the
    /// parsed value is zero or negative.
    pub fn validate_amount(text: &str) -> Result<Decimal, ValidationError> {
        let amount: Decimal = text
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidAmountFormat(text.to_string()))?;

        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(amount));
        }
        Ok(amount)
    }

    /// Validates that all required fields are present
    ///
    /// Date, vehicle class, and amount are required; the description field is
    /// exempt and never checked here.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredField`] if any of the three
    /// strings is empty.
    pub fn validate_required_fields(
        date: &str,
        vehicle_class: &str,
        amount: &str,
    ) -> Result<(), ValidationError> {
        if date.is_empty() || vehicle_class.is_empty() || amount.is_empty() {
            return Err(ValidationError::MissingRequiredField);
        }
        Ok(())
    }

    /// Validates a whole claim submission
    ///
    /// Composes the field checks in strict order (required fields, then date
    /// format, then amount), short-circuiting on the first failure. On
    /// success returns the normalized positive amount; date and vehicle class
    /// pass through unchanged in the caller's hands.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] encountered, in check order.
    pub fn validate_claim(
        date: &str,
        vehicle_class: &str,
        amount: &str,
    ) -> Result<Decimal, ValidationError> {
        Self::validate_required_fields(date, vehicle_class, amount)?;
        Self::validate_date(date)?;
        Self::validate_amount(amount)
    }
}
