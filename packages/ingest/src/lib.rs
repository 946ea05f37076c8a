#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Upload handling for student result sheets.
//!
//! Thin collaborator between the extraction pipeline and the store:
//! read (or download) a result sheet, run [`extract_results`] over its
//! bytes, and optionally insert the assembled records. The pipeline
//! itself never touches persistence; that wiring lives here.

use std::path::Path;

use result_portal_extract::{ExtractionError, download, extract_results};
use result_portal_result_models::ResultRecord;
use result_portal_store::{ConnectionError, ResultStore, StoreError};

/// Errors that can occur while handling an upload.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The extraction pipeline rejected the document.
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    /// The store rejected an operation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Connecting to the configured store backend failed.
    #[error("store connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extracts result records from a local result sheet PDF.
///
/// # Errors
///
/// Returns [`IngestError`] if the file cannot be read or the document
/// is unreadable.
pub async fn extract_file(path: &Path) -> Result<Vec<ResultRecord>, IngestError> {
    let bytes = tokio::fs::read(path).await?;
    log::info!("Extracting {} ({} bytes)", path.display(), bytes.len());
    Ok(extract_results(&bytes)?)
}

/// Downloads a result sheet by URL and extracts its records, stamping
/// each record with the source URL.
///
/// # Errors
///
/// Returns [`IngestError`] if the download or extraction fails.
pub async fn extract_url(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<ResultRecord>, IngestError> {
    let bytes = download::fetch_pdf(client, url).await?;
    let mut records = extract_results(&bytes)?;
    for record in &mut records {
        record.pdf_url = Some(url.to_string());
    }
    Ok(records)
}

/// Extracts a local result sheet and inserts the records into the
/// store. Returns the stored copies with durable ids.
///
/// # Errors
///
/// Returns [`IngestError`] if extraction or the insert fails.
pub async fn ingest_file(
    store: &dyn ResultStore,
    path: &Path,
) -> Result<Vec<ResultRecord>, IngestError> {
    let records = extract_file(path).await?;
    if records.is_empty() {
        log::warn!("No student records found in {}", path.display());
        return Ok(Vec::new());
    }
    Ok(store.insert(&records).await?)
}
