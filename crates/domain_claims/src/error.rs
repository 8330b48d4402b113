//! Claims domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors produced while validating raw claim input
///
/// All variants are recoverable: the user corrects the offending field and
/// resubmits. Validation failures never reach storage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("all required fields (date, vehicle class, amount) must be filled in")]
    MissingRequiredField,

    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("invalid amount `{0}`, expected a numeric value")]
    InvalidAmountFormat(String),

    #[error("claim amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),
}
