//! Claim Store Infrastructure
//!
//! This crate owns the persisted claim collection. All access to the
//! underlying SQLite file goes through [`ClaimStore`]; no other part of the
//! system opens the file directly.
//!
//! # Connection Discipline
//!
//! Every operation opens a fresh connection, performs one unit of work, and
//! closes it before returning. There is no pooling, no long-lived handle, and
//! no in-memory cache; callers are expected to serialize operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::ClaimStore;
//!
//! let store = ClaimStore::new("claims.db");
//! store.initialize().await?;
//! let id = store.add_claim(&claim).await?;
//! ```

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::ClaimStore;
