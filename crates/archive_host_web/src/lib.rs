//! Browser (`wasm32`) implementation of the [`archive_host`] service contract.
//!
//! This crate is the concrete browser-side wiring for the archive backend: a `fetch`-based
//! [`ArchiveService`](archive_host::ArchiveService) implementation plus file-payload readers for
//! the upload surfaces. HTTP transport glue is split wasm / non-wasm under `http/` so the crate
//! compiles — and its pure record-mapping and URL-building logic tests — on the host target.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod archive;
pub mod files;
mod http;

pub use archive::WebArchiveService;
pub use files::read_file_list;
