//! Archive backend service contract.

use std::{future::Future, pin::Pin};

use crate::error::ArchiveError;
use crate::types::{ArchiveEntry, SearchHit, UploadFile};

/// Object-safe boxed future used by [`ArchiveService`] async methods.
pub type ArchiveFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Minimum query length the search endpoint is consulted for; shorter queries mean
/// "clear the search override" and never reach the service.
pub const SEARCH_MIN_QUERY_LEN: usize = 2;

/// Host service for all remote archive storage and AI operations.
///
/// All paths crossing this boundary are canonical archive-rooted paths; implementations must
/// normalize every path they receive from the backend before constructing model values.
pub trait ArchiveService {
    /// Lists the direct children of a folder.
    fn list<'a>(
        &'a self,
        path: &'a str,
    ) -> ArchiveFuture<'a, Result<Vec<ArchiveEntry>, ArchiveError>>;

    /// Searches the archive index. Only called for queries of length
    /// [`SEARCH_MIN_QUERY_LEN`] or more.
    fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> ArchiveFuture<'a, Result<Vec<SearchHit>, ArchiveError>>;

    /// Uploads files into the archive inbox.
    fn upload<'a>(
        &'a self,
        files: Vec<UploadFile>,
    ) -> ArchiveFuture<'a, Result<(), ArchiveError>>;

    /// Best-effort cleanup of original desktop files after a drag-and-drop upload.
    fn delete_originals<'a>(
        &'a self,
        filenames: Vec<String>,
    ) -> ArchiveFuture<'a, Result<(), ArchiveError>>;

    /// Renames a file; `new` is the full canonical target path.
    fn rename_file<'a>(
        &'a self,
        old: &'a str,
        new: &'a str,
    ) -> ArchiveFuture<'a, Result<(), ArchiveError>>;

    /// Renames a folder; `new` is the full canonical target path resolvable as a child of the
    /// folder's parent.
    fn rename_folder<'a>(
        &'a self,
        old: &'a str,
        new: &'a str,
    ) -> ArchiveFuture<'a, Result<(), ArchiveError>>;

    /// Deletes a single file.
    fn delete_file<'a>(&'a self, path: &'a str) -> ArchiveFuture<'a, Result<(), ArchiveError>>;

    /// Recursively deletes a folder.
    fn delete_folder<'a>(&'a self, path: &'a str) -> ArchiveFuture<'a, Result<(), ArchiveError>>;

    /// Translates a document, returning the raw text response verbatim.
    fn translate<'a>(
        &'a self,
        path: &'a str,
        lang: &'a str,
    ) -> ArchiveFuture<'a, Result<String, ArchiveError>>;

    /// Explains a document in simple language, returning the raw text response verbatim.
    fn explain<'a>(
        &'a self,
        path: &'a str,
        lang: &'a str,
    ) -> ArchiveFuture<'a, Result<String, ArchiveError>>;

    /// Builds the download URL for a file; `force` selects the attachment variant.
    fn download_url(&self, path: &str, force: bool) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op archive service for unsupported targets and baseline tests.
pub struct NoopArchiveService;

impl NoopArchiveService {
    fn unavailable(op: &str) -> ArchiveError {
        ArchiveError::transport(format!("archive backend unavailable: {op}"))
    }
}

impl ArchiveService for NoopArchiveService {
    fn list<'a>(
        &'a self,
        _path: &'a str,
    ) -> ArchiveFuture<'a, Result<Vec<ArchiveEntry>, ArchiveError>> {
        Box::pin(async { Err(Self::unavailable("list")) })
    }

    fn search<'a>(
        &'a self,
        _query: &'a str,
    ) -> ArchiveFuture<'a, Result<Vec<SearchHit>, ArchiveError>> {
        Box::pin(async { Err(Self::unavailable("search")) })
    }

    fn upload<'a>(
        &'a self,
        _files: Vec<UploadFile>,
    ) -> ArchiveFuture<'a, Result<(), ArchiveError>> {
        Box::pin(async { Err(Self::unavailable("upload")) })
    }

    fn delete_originals<'a>(
        &'a self,
        _filenames: Vec<String>,
    ) -> ArchiveFuture<'a, Result<(), ArchiveError>> {
        Box::pin(async { Err(Self::unavailable("delete_originals")) })
    }

    fn rename_file<'a>(
        &'a self,
        _old: &'a str,
        _new: &'a str,
    ) -> ArchiveFuture<'a, Result<(), ArchiveError>> {
        Box::pin(async { Err(Self::unavailable("rename_file")) })
    }

    fn rename_folder<'a>(
        &'a self,
        _old: &'a str,
        _new: &'a str,
    ) -> ArchiveFuture<'a, Result<(), ArchiveError>> {
        Box::pin(async { Err(Self::unavailable("rename_folder")) })
    }

    fn delete_file<'a>(&'a self, _path: &'a str) -> ArchiveFuture<'a, Result<(), ArchiveError>> {
        Box::pin(async { Err(Self::unavailable("delete_file")) })
    }

    fn delete_folder<'a>(&'a self, _path: &'a str) -> ArchiveFuture<'a, Result<(), ArchiveError>> {
        Box::pin(async { Err(Self::unavailable("delete_folder")) })
    }

    fn translate<'a>(
        &'a self,
        _path: &'a str,
        _lang: &'a str,
    ) -> ArchiveFuture<'a, Result<String, ArchiveError>> {
        Box::pin(async { Err(Self::unavailable("translate")) })
    }

    fn explain<'a>(
        &'a self,
        _path: &'a str,
        _lang: &'a str,
    ) -> ArchiveFuture<'a, Result<String, ArchiveError>> {
        Box::pin(async { Err(Self::unavailable("explain")) })
    }

    fn download_url(&self, _path: &str, _force: bool) -> String {
        String::new()
    }
}
