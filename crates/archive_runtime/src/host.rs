//! Host-side execution of reducer effects against the archive service and browser collaborators.
//!
//! The reducer stays pure; everything that touches the network, the prompt/confirm dialogs, or
//! `window.open` happens here. Each async completion re-enters the reducer as an action carrying
//! the token it was issued with.

use std::rc::Rc;

use leptos::{logging, spawn_local, Callable, Callback};

use archive_host::{ArchiveEntryKind, ArchiveService};
use archive_host_web::WebArchiveService;

use crate::model::AiAction;
use crate::reducer::{ArchiveAction, ArchiveEffect};

#[derive(Clone)]
/// Host service bundle for archive runtime side effects.
pub struct ArchiveHostContext {
    service: Rc<dyn ArchiveService>,
}

impl Default for ArchiveHostContext {
    fn default() -> Self {
        Self::new(Rc::new(WebArchiveService::same_origin()))
    }
}

impl ArchiveHostContext {
    /// Builds a host context over an explicit archive service (injected in tests).
    pub fn new(service: Rc<dyn ArchiveService>) -> Self {
        Self { service }
    }

    /// Returns the configured archive service.
    pub fn archive_service(&self) -> Rc<dyn ArchiveService> {
        self.service.clone()
    }

    /// Executes a single [`ArchiveEffect`] emitted by the reducer.
    pub fn run_effect(&self, dispatch: Callback<ArchiveAction>, effect: ArchiveEffect) {
        match effect {
            ArchiveEffect::FetchListing { path, token } => {
                let service = self.service.clone();
                spawn_local(async move {
                    let result = service.list(&path).await;
                    dispatch.call(ArchiveAction::ListingLoaded { token, result });
                });
            }
            ArchiveEffect::FetchSearch { query, token } => {
                let service = self.service.clone();
                spawn_local(async move {
                    let result = service.search(&query).await;
                    dispatch.call(ArchiveAction::SearchLoaded { token, result });
                });
            }
            ArchiveEffect::PromptRename {
                kind,
                path,
                current_name,
            } => {
                let message = match kind {
                    ArchiveEntryKind::File => "New file name:",
                    ArchiveEntryKind::Folder => "New folder name:",
                };
                let new_name = prompt_text(message, &current_name);
                dispatch.call(ArchiveAction::RenameSubmitted {
                    kind,
                    path,
                    new_name,
                });
            }
            ArchiveEffect::ConfirmDelete { kind, path } => {
                let message = match kind {
                    ArchiveEntryKind::File => "Really delete this file?",
                    ArchiveEntryKind::Folder => {
                        "Really delete this folder including all of its files?"
                    }
                };
                let accepted = confirm_choice(message);
                dispatch.call(ArchiveAction::DeleteConfirmed {
                    kind,
                    path,
                    accepted,
                });
            }
            ArchiveEffect::SubmitRename { kind, old, new } => {
                let service = self.service.clone();
                spawn_local(async move {
                    let result = match kind {
                        ArchiveEntryKind::File => service.rename_file(&old, &new).await,
                        ArchiveEntryKind::Folder => service.rename_folder(&old, &new).await,
                    };
                    dispatch.call(ArchiveAction::RenameCompleted {
                        kind,
                        old_path: old,
                        result,
                    });
                });
            }
            ArchiveEffect::SubmitDelete { kind, path } => {
                let service = self.service.clone();
                spawn_local(async move {
                    let result = match kind {
                        ArchiveEntryKind::File => service.delete_file(&path).await,
                        ArchiveEntryKind::Folder => service.delete_folder(&path).await,
                    };
                    dispatch.call(ArchiveAction::DeleteCompleted { kind, path, result });
                });
            }
            ArchiveEffect::UploadFiles { source, files } => {
                let filenames: Vec<String> = files.iter().map(|file| file.name.clone()).collect();
                let service = self.service.clone();
                spawn_local(async move {
                    let result = service.upload(files).await;
                    dispatch.call(ArchiveAction::UploadCompleted {
                        source,
                        filenames,
                        result,
                    });
                });
            }
            ArchiveEffect::ConfirmDeleteOriginals { filenames } => {
                let accepted = confirm_choice("Upload complete. Delete the original files?");
                dispatch.call(ArchiveAction::DeleteOriginalsConfirmed {
                    filenames,
                    accepted,
                });
            }
            ArchiveEffect::DeleteOriginals { filenames } => {
                // Best-effort cleanup; the user was already notified, failures only get logged.
                let service = self.service.clone();
                spawn_local(async move {
                    if let Err(err) = service.delete_originals(filenames).await {
                        logging::warn!("delete originals failed: {err}");
                    }
                });
            }
            ArchiveEffect::FetchAiText {
                action,
                path,
                lang,
                token,
            } => {
                let service = self.service.clone();
                spawn_local(async move {
                    let result = match action {
                        AiAction::Translate => service.translate(&path, &lang).await,
                        AiAction::Explain => service.explain(&path, &lang).await,
                    };
                    dispatch.call(ArchiveAction::AiCompleted { token, result });
                });
            }
            ArchiveEffect::OpenDownload { path, force } => {
                let url = self.service.download_url(&path, force);
                open_download_url(&url, force);
            }
        }
    }
}

/// Asks the user for a text value; `None` when the dialog was dismissed.
fn prompt_text(message: &str, default: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| {
                window
                    .prompt_with_message_and_default(message, default)
                    .ok()
            })
            .flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (message, default);
        None
    }
}

/// Asks the user a yes/no question; dismissing counts as declining.
fn confirm_choice(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| window.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        false
    }
}

/// Opens a download URL: forced saves replace the current location (the backend answers with an
/// attachment disposition), inline views open a new tab.
fn open_download_url(url: &str, force: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if force {
            let _ = window.location().assign(url);
        } else {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        logging::log!("open download url: {url} (force={force})");
    }
}
