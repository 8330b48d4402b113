//! Claim records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::ClaimValidator;

/// Identifier assigned by the store on insert, never reused or renumbered
pub type ClaimId = i64;

/// Vehicle classes offered by the frontend
///
/// Suggestions only: the store accepts any non-empty vehicle class string.
pub const SUGGESTED_VEHICLE_CLASSES: &[&str] = &["Car", "Truck", "Bus", "Motorcycle", "Other"];

/// A recorded insurance claim
///
/// Claims are immutable once stored: there is no update operation, only
/// insert, list, and bulk clear/reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Identifier assigned by the store
    pub claim_id: ClaimId,
    /// Date of loss, ISO-8601 (`YYYY-MM-DD`)
    pub date: String,
    /// Vehicle class label
    pub vehicle_class: String,
    /// Claimed amount, strictly positive
    pub claim_amount: Decimal,
    /// Free-text description, empty when none was given
    pub description: String,
}

/// A claim ready for insertion, before the store has assigned an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClaim {
    /// Date of loss, ISO-8601 (`YYYY-MM-DD`)
    pub date: String,
    /// Vehicle class label
    pub vehicle_class: String,
    /// Claimed amount, strictly positive
    pub claim_amount: Decimal,
    /// Free-text description, optional
    pub description: String,
}

impl NewClaim {
    /// Builds an insertable claim from raw form fields
    ///
    /// Runs [`ClaimValidator::validate_claim`] over the required fields and
    /// keeps the whitespace-trimmed description. The description is always
    /// optional.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered, in the validator's
    /// fixed order: presence, date format, amount.
    pub fn validated(
        date: &str,
        vehicle_class: &str,
        amount: &str,
        description: &str,
    ) -> Result<Self, ValidationError> {
        let claim_amount = ClaimValidator::validate_claim(date, vehicle_class, amount)?;
        Ok(Self {
            date: date.to_string(),
            vehicle_class: vehicle_class.to_string(),
            claim_amount,
            description: description.trim().to_string(),
        })
    }
}
