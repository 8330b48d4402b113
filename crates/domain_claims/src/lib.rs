//! Claims Domain
//!
//! This crate provides the claim record types and the field validation rules
//! that gatekeep raw form input before it reaches storage.
//!
//! # Submission Flow
//!
//! ```text
//! raw field strings -> ClaimValidator -> NewClaim -> claim store
//! ```

pub mod claim;
pub mod error;
pub mod validation;

pub use claim::{Claim, ClaimId, NewClaim, SUGGESTED_VEHICLE_CLASSES};
pub use error::ValidationError;
pub use validation::ClaimValidator;
