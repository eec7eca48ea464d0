//! HTTP transport for the archive backend, routed to target-specific implementations.
//!
//! Higher-level service code sees a uniform async API; the wasm implementation goes through the
//! browser `fetch` API while the non-wasm implementation reports the transport as unavailable.

use archive_host::{ArchiveError, UploadFile};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

/// Successful (2xx) response body with its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HttpText {
    pub(crate) status: u16,
    pub(crate) body: String,
}

/// Issues a GET request and returns the response body text.
pub(crate) async fn get_text(url: &str) -> Result<HttpText, ArchiveError> {
    imp::get_text(url).await
}

/// Issues a POST request with a JSON body.
pub(crate) async fn post_json(
    url: &str,
    body: &serde_json::Value,
) -> Result<HttpText, ArchiveError> {
    imp::post_json(url, body).await
}

/// Issues a multipart `files` form POST built from raw upload payloads.
pub(crate) async fn post_multipart(
    url: &str,
    files: &[UploadFile],
) -> Result<HttpText, ArchiveError> {
    imp::post_multipart(url, files).await
}
