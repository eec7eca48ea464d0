//! Typed archive-domain contracts and shared models used across the runtime and browser adapters.
//!
//! This crate is the API-first boundary for the remote document archive: canonical path
//! normalization, the listing/search data model, the [`ArchiveService`] contract, and the error
//! taxonomy. Concrete browser adapters live in `archive_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod path;
pub mod service;
pub mod types;

pub use error::ArchiveError;
pub use path::{
    is_same_or_descendant, join_child, leaf_name, normalize_archive_path, parent_path,
    ARCHIVE_ROOT,
};
pub use service::{ArchiveFuture, ArchiveService, NoopArchiveService, SEARCH_MIN_QUERY_LEN};
pub use types::{
    ArchiveEntry, ArchiveEntryKind, LanguageOption, SearchHit, UploadFile, DEFAULT_LANGUAGE_CODE,
    SUPPORTED_LANGUAGES,
};
