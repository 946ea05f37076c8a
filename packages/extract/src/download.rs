//! Result-sheet download utilities.
//!
//! The document loader collaborator: fetch a result sheet by URL and
//! hand its bytes to the extraction pipeline.

use crate::ExtractionError;

/// Downloads a result sheet and returns its raw bytes.
///
/// # Errors
///
/// Returns [`ExtractionError::Http`] if the request fails or the server
/// responds with an error status.
pub async fn fetch_pdf(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, ExtractionError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    log::debug!("Downloaded {} bytes from {url}", bytes.len());

    Ok(bytes.to_vec())
}
