//! Claim store error types

use thiserror::Error;

/// Errors that can occur while operating on the claim store
///
/// Storage errors are never fatal to the process: the frontend surfaces them
/// as a notification and returns control to the form.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A schema-level constraint (NOT NULL) rejected the row
    #[error("storage constraint violated: {0}")]
    ConstraintViolation(String),

    /// The underlying file could not be used (locked, missing table, corrupt)
    #[error("claim store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Checks if this error is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, StoreError::ConstraintViolation(_))
    }

    /// Checks if this error means the store could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

/// Classifies SQLx errors into the store's error taxonomy
///
/// SQLite reports constraint failures through the driver's structured error
/// kind; everything else (locked file, missing table, corrupt data) is an
/// availability problem. No message-substring matching.
impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db_err) => {
                use sqlx::error::ErrorKind;
                match db_err.kind() {
                    ErrorKind::NotNullViolation
                    | ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::CheckViolation => {
                        StoreError::ConstraintViolation(db_err.message().to_string())
                    }
                    _ => StoreError::Unavailable(db_err.message().to_string()),
                }
            }
            _ => StoreError::Unavailable(error.to_string()),
        }
    }
}
