#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Persistence collaborator for assembled result records.
//!
//! The extraction pipeline never talks to storage itself; callers hand
//! its output to a [`ResultStore`]. The backend is chosen explicitly at
//! construction time via [`StoreConfig`]. An unknown backend is a typed
//! [`ConnectionError`], never a silently substituted mock, so callers
//! can always tell what they are connected to.

pub mod memory;

use async_trait::async_trait;
use result_portal_result_models::ResultRecord;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record exists with the given durable id.
    #[error("record not found: {id}")]
    NotFound {
        /// The id that was requested.
        id: String,
    },

    /// A stored row could not be converted to a [`ResultRecord`].
    #[error("data conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}

/// Errors raised while establishing a store connection.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    /// The configured backend is not supported by this build.
    #[error("unsupported store backend: {backend}")]
    UnsupportedBackend {
        /// The backend that was requested.
        backend: String,
    },
}

/// Which storage backend to connect to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum StoreBackend {
    /// In-process, non-durable store. Records live for the lifetime of
    /// the process only.
    Memory,
}

/// Store construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Backend to connect to.
    pub backend: StoreBackend,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
        }
    }
}

/// Narrow persistence interface for result records.
///
/// Records are immutable once stored: a correction is a delete followed
/// by a fresh insert, never an in-place edit.
#[async_trait]
pub trait ResultStore: std::fmt::Debug + Send + Sync {
    /// Inserts assembled records, replacing each provisional id with a
    /// durable one. Returns the stored copies.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend rejects the write.
    async fn insert(&self, records: &[ResultRecord]) -> Result<Vec<ResultRecord>, StoreError>;

    /// Returns all stored records, newest upload first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend query fails.
    async fn all(&self) -> Result<Vec<ResultRecord>, StoreError>;

    /// Returns the records for one student (exact, case-insensitive
    /// match on the student id token).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend query fails.
    async fn search_by_student(&self, student_id: &str) -> Result<Vec<ResultRecord>, StoreError>;

    /// Deletes the record with the given durable id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such record exists.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Connects to the backend named by `config`.
///
/// # Errors
///
/// Returns [`ConnectionError::UnsupportedBackend`] if the configured
/// backend is not available in this build.
pub fn connect(config: &StoreConfig) -> Result<Box<dyn ResultStore>, ConnectionError> {
    match config.backend {
        StoreBackend::Memory => {
            log::info!("Connected to in-memory result store (non-durable)");
            Ok(Box::new(memory::MemoryStore::new()))
        }
    }
}

/// Connects to the backend named by a configuration string (e.g. the
/// `RESULT_PORTAL_STORE` environment value or a CLI flag).
///
/// # Errors
///
/// Returns [`ConnectionError::UnsupportedBackend`] if the name does not
/// identify a known backend.
pub fn connect_by_name(backend: &str) -> Result<Box<dyn ResultStore>, ConnectionError> {
    let parsed = backend
        .parse::<StoreBackend>()
        .map_err(|_| ConnectionError::UnsupportedBackend {
            backend: backend.to_string(),
        })?;
    connect(&StoreConfig { backend: parsed })
}
