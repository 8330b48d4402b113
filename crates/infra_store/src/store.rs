//! SQLite-backed claim store

use std::path::{Path, PathBuf};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{Connection, FromRow};
use tracing::{debug, info};

use domain_claims::{Claim, ClaimId, NewClaim};

use crate::error::StoreError;

/// Canonical schema for the claims table
const CREATE_CLAIMS_TABLE: &str = "\
CREATE TABLE claims (
    claim_id INTEGER PRIMARY KEY,
    date TEXT NOT NULL,
    vehicle_class TEXT NOT NULL,
    claim_amount REAL NOT NULL,
    description TEXT
)";

const CREATE_CLAIMS_TABLE_IF_MISSING: &str = "\
CREATE TABLE IF NOT EXISTS claims (
    claim_id INTEGER PRIMARY KEY,
    date TEXT NOT NULL,
    vehicle_class TEXT NOT NULL,
    claim_amount REAL NOT NULL,
    description TEXT
)";

/// Store for recorded insurance claims
///
/// Sole owner of the claims database file. The store holds only the file
/// path; each operation opens its own connection and closes it before
/// returning.
///
/// # Example
///
/// ```rust,ignore
/// let store = ClaimStore::new(ClaimStore::DEFAULT_PATH);
/// store.initialize().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ClaimStore {
    path: PathBuf,
}

impl ClaimStore {
    /// Default database file, relative to the working directory
    pub const DEFAULT_PATH: &'static str = "claims.db";

    /// Creates a store over the given database file
    ///
    /// The file is created on first use if it does not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The database file this store operates on
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensures the claims table exists with the canonical schema
    ///
    /// Idempotent. Databases created before the `description` column existed
    /// get the column added in place without disturbing existing rows; the
    /// column check is an explicit `pragma_table_info` query, so an
    /// up-to-date schema is a no-op rather than a swallowed error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the file cannot be opened or
    /// the schema statements fail.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;

        sqlx::query(CREATE_CLAIMS_TABLE_IF_MISSING)
            .execute(&mut conn)
            .await?;

        let description_columns: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pragma_table_info('claims') WHERE name = 'description'",
        )
        .fetch_one(&mut conn)
        .await?;

        if description_columns == 0 {
            info!(path = %self.path.display(), "adding description column to claims table");
            sqlx::query("ALTER TABLE claims ADD COLUMN description TEXT")
                .execute(&mut conn)
                .await?;
        }

        conn.close().await?;
        Ok(())
    }

    /// Appends one claim and returns its assigned identifier
    ///
    /// Performs no semantic validation; callers are expected to have run the
    /// claim through the validator. The schema's NOT NULL constraints still
    /// apply at the storage level.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConstraintViolation`] if the row violates the
    /// schema, or [`StoreError::Unavailable`] for any other engine failure.
    pub async fn add_claim(&self, claim: &NewClaim) -> Result<ClaimId, StoreError> {
        let amount = claim.claim_amount.to_f64().ok_or_else(|| {
            StoreError::ConstraintViolation(format!(
                "claim_amount {} cannot be stored as REAL",
                claim.claim_amount
            ))
        })?;

        let mut conn = self.connect().await?;
        let result = sqlx::query(
            "INSERT INTO claims (date, vehicle_class, claim_amount, description) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&claim.date)
        .bind(&claim.vehicle_class)
        .bind(amount)
        .bind(&claim.description)
        .execute(&mut conn)
        .await?;
        conn.close().await?;

        let claim_id = result.last_insert_rowid();
        debug!(claim_id, date = %claim.date, "claim stored");
        Ok(claim_id)
    }

    /// Returns every stored claim, most recent loss date first
    ///
    /// ISO dates sort lexicographically in chronological order; claims with
    /// equal dates come back in unspecified relative order. An empty table
    /// yields an empty vec, never an error.
    pub async fn list_all(&self) -> Result<Vec<Claim>, StoreError> {
        let mut conn = self.connect().await?;
        let rows: Vec<ClaimRow> = sqlx::query_as(
            "SELECT claim_id, date, vehicle_class, claim_amount, description \
             FROM claims ORDER BY date DESC",
        )
        .fetch_all(&mut conn)
        .await?;
        conn.close().await?;

        rows.into_iter().map(Claim::try_from).collect()
    }

    /// Deletes every stored claim, keeping the schema
    ///
    /// Identifier continuity after a clear is up to the engine's rowid
    /// behavior; callers must not depend on it.
    pub async fn clear_all(&self) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        sqlx::query("DELETE FROM claims").execute(&mut conn).await?;
        conn.close().await?;

        info!(path = %self.path.display(), "all claims deleted");
        Ok(())
    }

    /// Drops and recreates the claims table from the canonical schema
    ///
    /// Removes all data and normalizes the schema in one step; the repair
    /// path when a corrupt or outdated schema is suspected.
    pub async fn reset(&self) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        sqlx::query("DROP TABLE IF EXISTS claims")
            .execute(&mut conn)
            .await?;
        sqlx::query(CREATE_CLAIMS_TABLE).execute(&mut conn).await?;
        conn.close().await?;

        info!(path = %self.path.display(), "claims table reset");
        Ok(())
    }

    async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true);

        SqliteConnection::connect_with(&options)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

impl Default for ClaimStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

/// Row shape of the claims table
#[derive(Debug, FromRow)]
struct ClaimRow {
    claim_id: i64,
    date: String,
    vehicle_class: String,
    claim_amount: f64,
    description: Option<String>,
}

impl TryFrom<ClaimRow> for Claim {
    type Error = StoreError;

    fn try_from(row: ClaimRow) -> Result<Self, StoreError> {
        let claim_amount = Decimal::try_from(row.claim_amount).map_err(|e| {
            StoreError::Unavailable(format!(
                "stored claim_amount for claim {} is unreadable: {e}",
                row.claim_id
            ))
        })?;

        Ok(Claim {
            claim_id: row.claim_id,
            date: row.date,
            vehicle_class: row.vehicle_class,
            claim_amount,
            description: row.description.unwrap_or_default(),
        })
    }
}
