//! Shared runtime for the browser-resident archive client: the reducer-owned navigation state
//! machine, host effect execution, and the Leptos shell components.

pub mod components;
pub mod host;
pub mod model;
pub mod reducer;

mod effect_executor;
mod runtime_context;

pub use components::ArchiveShell;
pub use host::ArchiveHostContext;
pub use runtime_context::{use_archive_runtime, ArchiveProvider, ArchiveRuntimeContext};
