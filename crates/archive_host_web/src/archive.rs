//! Browser archive service backed by the remote HTTP API.

use archive_host::{
    normalize_archive_path, ArchiveEntry, ArchiveEntryKind, ArchiveError, ArchiveFuture,
    ArchiveService, SearchHit, UploadFile,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use serde_json::json;

use crate::http;

// encodeURIComponent-compatible query encoding: keep the RFC 3986 unreserved set verbatim.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_query(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE_SET).to_string()
}

#[derive(Debug, Clone, Default)]
/// Archive service that issues `fetch` requests against the backend HTTP API.
///
/// The default instance targets the page origin, the deployment shape the backend serves the
/// client from.
pub struct WebArchiveService {
    base_url: String,
}

impl WebArchiveService {
    /// Builds a service targeting an explicit backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Builds the default same-origin service.
    pub fn same_origin() -> Self {
        Self::default()
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path_and_query)
    }
}

#[derive(Debug, Deserialize)]
struct RawListingRecord {
    name: String,
    path: String,
    kind: ArchiveEntryKind,
}

#[derive(Debug, Deserialize)]
struct RawSearchRecord {
    filename: String,
    institution: String,
    year: u16,
    path: String,
}

// Listing responses are never trusted to already be canonical: legacy index rows carry OS-native
// separators or full filesystem prefixes.
fn map_listing_records(records: Vec<RawListingRecord>) -> Vec<ArchiveEntry> {
    records
        .into_iter()
        .map(|record| ArchiveEntry {
            name: record.name,
            path: normalize_archive_path(&record.path),
            kind: record.kind,
        })
        .collect()
}

fn map_search_records(records: Vec<RawSearchRecord>) -> Vec<SearchHit> {
    records
        .into_iter()
        .map(|record| SearchHit {
            filename: record.filename,
            institution: record.institution,
            year: record.year,
            path: normalize_archive_path(&record.path),
        })
        .collect()
}

fn decode<T: serde::de::DeserializeOwned>(
    response: &http::HttpText,
    what: &str,
) -> Result<T, ArchiveError> {
    serde_json::from_str(&response.body)
        .map_err(|err| ArchiveError::backend(response.status, format!("malformed {what} payload: {err}")))
}

impl ArchiveService for WebArchiveService {
    fn list<'a>(
        &'a self,
        path: &'a str,
    ) -> ArchiveFuture<'a, Result<Vec<ArchiveEntry>, ArchiveError>> {
        Box::pin(async move {
            let url = self.url(&format!("/list?path={}", encode_query(path)));
            let response = http::get_text(&url).await?;
            let records: Vec<RawListingRecord> = decode(&response, "listing")?;
            Ok(map_listing_records(records))
        })
    }

    fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> ArchiveFuture<'a, Result<Vec<SearchHit>, ArchiveError>> {
        Box::pin(async move {
            let url = self.url(&format!("/search?query={}", encode_query(query)));
            let response = http::get_text(&url).await?;
            let records: Vec<RawSearchRecord> = decode(&response, "search")?;
            Ok(map_search_records(records))
        })
    }

    fn upload<'a>(&'a self, files: Vec<UploadFile>) -> ArchiveFuture<'a, Result<(), ArchiveError>> {
        Box::pin(async move {
            http::post_multipart(&self.url("/upload"), &files).await?;
            Ok(())
        })
    }

    fn delete_originals<'a>(
        &'a self,
        filenames: Vec<String>,
    ) -> ArchiveFuture<'a, Result<(), ArchiveError>> {
        Box::pin(async move {
            let body = json!({ "filenames": filenames });
            http::post_json(&self.url("/delete_originals"), &body).await?;
            Ok(())
        })
    }

    fn rename_file<'a>(
        &'a self,
        old: &'a str,
        new: &'a str,
    ) -> ArchiveFuture<'a, Result<(), ArchiveError>> {
        Box::pin(async move {
            let body = json!({ "old": old, "new": new });
            http::post_json(&self.url("/rename"), &body).await?;
            Ok(())
        })
    }

    fn rename_folder<'a>(
        &'a self,
        old: &'a str,
        new: &'a str,
    ) -> ArchiveFuture<'a, Result<(), ArchiveError>> {
        Box::pin(async move {
            let body = json!({ "old": old, "new": new });
            http::post_json(&self.url("/rename_folder"), &body).await?;
            Ok(())
        })
    }

    fn delete_file<'a>(&'a self, path: &'a str) -> ArchiveFuture<'a, Result<(), ArchiveError>> {
        Box::pin(async move {
            let body = json!({ "file": path });
            http::post_json(&self.url("/delete"), &body).await?;
            Ok(())
        })
    }

    fn delete_folder<'a>(&'a self, path: &'a str) -> ArchiveFuture<'a, Result<(), ArchiveError>> {
        Box::pin(async move {
            let body = json!({ "folder": path });
            http::post_json(&self.url("/delete_folder"), &body).await?;
            Ok(())
        })
    }

    fn translate<'a>(
        &'a self,
        path: &'a str,
        lang: &'a str,
    ) -> ArchiveFuture<'a, Result<String, ArchiveError>> {
        Box::pin(async move {
            let url = self.url(&format!(
                "/translate?file={}&lang={}",
                encode_query(path),
                encode_query(lang)
            ));
            Ok(http::get_text(&url).await?.body)
        })
    }

    fn explain<'a>(
        &'a self,
        path: &'a str,
        lang: &'a str,
    ) -> ArchiveFuture<'a, Result<String, ArchiveError>> {
        Box::pin(async move {
            let url = self.url(&format!(
                "/explain?file={}&lang={}",
                encode_query(path),
                encode_query(lang)
            ));
            Ok(http::get_text(&url).await?.body)
        })
    }

    fn download_url(&self, path: &str, force: bool) -> String {
        let endpoint = if force { "/force_download" } else { "/download" };
        self.url(&format!("{endpoint}?file={}", encode_query(path)))
    }
}
