//! Reducer actions, side-effect intents, and transition logic for the archive browser.

use thiserror::Error;

use archive_host::{
    is_same_or_descendant, join_child, leaf_name, normalize_archive_path, parent_path,
    ArchiveEntry, ArchiveEntryKind, ArchiveError, SearchHit, UploadFile, SEARCH_MIN_QUERY_LEN,
};

use crate::model::{
    AiAction, AiModalState, AiOutput, ArchiveBrowserState, ContextMenuState, MenuAction,
    NavigationCursor, Notice, RequestToken, SearchState, UploadSource,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_archive`] to mutate [`ArchiveBrowserState`].
pub enum ArchiveAction {
    /// Navigate to a folder; the raw path is normalized before it touches the cursor.
    Navigate {
        /// Raw path input (user-typed, breadcrumb target, or backend-provided).
        raw: String,
    },
    /// A listing response arrived for the cursor.
    ListingLoaded {
        /// Token stamped when the listing request was issued.
        token: RequestToken,
        /// Listing result from the archive service.
        result: Result<Vec<ArchiveEntry>, ArchiveError>,
    },
    /// The search input changed.
    QueryChanged {
        /// Raw query text.
        query: String,
    },
    /// A search response arrived.
    SearchLoaded {
        /// Token stamped when the search request was issued.
        token: RequestToken,
        /// Search result from the archive service.
        result: Result<Vec<SearchHit>, ArchiveError>,
    },
    /// Open the context menu for an entry at a screen position.
    OpenEntryMenu {
        /// Entry under the pointer.
        entry: ArchiveEntry,
        /// Pointer x in page coordinates.
        x: i32,
        /// Pointer y in page coordinates.
        y: i32,
    },
    /// Close the open context menu, if any.
    CloseMenu,
    /// An action was chosen from the open context menu.
    MenuActionChosen {
        /// Chosen menu action.
        action: MenuAction,
    },
    /// Open a file inline (double-click or search hit click).
    OpenFile {
        /// Canonical path of the file.
        path: String,
    },
    /// The rename prompt was answered (`None` means cancelled).
    RenameSubmitted {
        /// Kind of the renamed entry.
        kind: ArchiveEntryKind,
        /// Canonical path being renamed.
        path: String,
        /// New leaf name, or `None` when the prompt was dismissed.
        new_name: Option<String>,
    },
    /// A rename request finished.
    RenameCompleted {
        /// Kind of the renamed entry.
        kind: ArchiveEntryKind,
        /// Canonical path the entry had before the rename.
        old_path: String,
        /// Rename result from the archive service.
        result: Result<(), ArchiveError>,
    },
    /// The delete confirmation was answered.
    DeleteConfirmed {
        /// Kind of the entry to delete.
        kind: ArchiveEntryKind,
        /// Canonical path to delete.
        path: String,
        /// Whether the user accepted the confirmation.
        accepted: bool,
    },
    /// A delete request finished.
    DeleteCompleted {
        /// Kind of the deleted entry.
        kind: ArchiveEntryKind,
        /// Canonical path that was deleted.
        path: String,
        /// Delete result from the archive service.
        result: Result<(), ArchiveError>,
    },
    /// An upload batch was submitted from a form or the drop zone.
    UploadRequested {
        /// Upload surface the batch came from.
        source: UploadSource,
        /// File payloads to upload.
        files: Vec<UploadFile>,
    },
    /// An upload batch finished.
    UploadCompleted {
        /// Upload surface the batch came from.
        source: UploadSource,
        /// Names of the uploaded files.
        filenames: Vec<String>,
        /// Upload result from the archive service.
        result: Result<(), ArchiveError>,
    },
    /// The delete-originals confirmation after a drop upload was answered.
    DeleteOriginalsConfirmed {
        /// Names of the original files on the user's desktop.
        filenames: Vec<String>,
        /// Whether the user accepted the cleanup.
        accepted: bool,
    },
    /// The language selector of the AI modal changed.
    SetAiLanguage {
        /// Selected language code.
        code: String,
    },
    /// The execute control of the AI modal was activated.
    RunAiAction,
    /// An AI text response arrived for the modal.
    AiCompleted {
        /// Token stamped when the AI request was issued.
        token: RequestToken,
        /// Raw text result from the archive service.
        result: Result<String, ArchiveError>,
    },
    /// Close the AI modal.
    CloseAiModal,
    /// Dismiss the banner notice.
    DismissNotice,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_archive`] for the host context to execute.
pub enum ArchiveEffect {
    /// Fetch a folder listing.
    FetchListing {
        /// Canonical folder path.
        path: String,
        /// Token to echo back in [`ArchiveAction::ListingLoaded`].
        token: RequestToken,
    },
    /// Fetch search results.
    FetchSearch {
        /// Trimmed query of length ≥ [`SEARCH_MIN_QUERY_LEN`].
        query: String,
        /// Token to echo back in [`ArchiveAction::SearchLoaded`].
        token: RequestToken,
    },
    /// Ask the user for a new leaf name.
    PromptRename {
        /// Kind of the entry being renamed.
        kind: ArchiveEntryKind,
        /// Canonical path being renamed.
        path: String,
        /// Current leaf name offered as the default value.
        current_name: String,
    },
    /// Ask the user to confirm a destructive delete.
    ConfirmDelete {
        /// Kind of the entry to delete.
        kind: ArchiveEntryKind,
        /// Canonical path to delete.
        path: String,
    },
    /// Issue a rename request.
    SubmitRename {
        /// Kind of the entry being renamed.
        kind: ArchiveEntryKind,
        /// Canonical path before the rename.
        old: String,
        /// Full canonical target path.
        new: String,
    },
    /// Issue a delete request.
    SubmitDelete {
        /// Kind of the entry to delete.
        kind: ArchiveEntryKind,
        /// Canonical path to delete.
        path: String,
    },
    /// Issue an upload request.
    UploadFiles {
        /// Upload surface the batch came from.
        source: UploadSource,
        /// File payloads to upload.
        files: Vec<UploadFile>,
    },
    /// Ask whether the original desktop files should be removed after a drop upload.
    ConfirmDeleteOriginals {
        /// Names of the original files.
        filenames: Vec<String>,
    },
    /// Fire-and-forget cleanup of original desktop files.
    DeleteOriginals {
        /// Names of the original files.
        filenames: Vec<String>,
    },
    /// Fetch translate/explain text for the AI modal.
    FetchAiText {
        /// Which AI endpoint to call.
        action: AiAction,
        /// Canonical path of the target file.
        path: String,
        /// Language code passed through verbatim.
        lang: String,
        /// Token to echo back in [`ArchiveAction::AiCompleted`].
        token: RequestToken,
    },
    /// Open a download URL (inline view or forced save).
    OpenDownload {
        /// Canonical path of the file.
        path: String,
        /// Whether to force a save instead of inline viewing.
        force: bool,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions referencing transient UI state that is not present.
pub enum ReducerError {
    /// A menu action was chosen while no context menu was open.
    #[error("no context menu is open")]
    MenuNotOpen,
    /// An AI modal action arrived while no modal was open.
    #[error("no translate/explain modal is open")]
    ModalNotOpen,
}

/// Applies an [`ArchiveAction`] to the browser state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for navigation, search, mutations,
/// and the transient menu/modal/banner surfaces. The cursor is mutated here and nowhere else.
///
/// # Errors
///
/// Returns a [`ReducerError`] when an action references a menu or modal that is not open.
pub fn reduce_archive(
    state: &mut ArchiveBrowserState,
    action: ArchiveAction,
) -> Result<Vec<ArchiveEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        ArchiveAction::Navigate { raw } => {
            let path = normalize_archive_path(&raw);
            let token = next_token(state);
            state.cursor = NavigationCursor {
                path: path.clone(),
                token,
            };
            state.listing_pending = true;
            state.listing_error = None;
            // Navigating away discards any active search override along with the query.
            state.search = SearchState::default();
            state.context_menu = None;
            effects.push(ArchiveEffect::FetchListing { path, token });
        }
        ArchiveAction::ListingLoaded { token, result } => {
            if token != state.cursor.token {
                // Superseded by a newer navigation; a late response must not win.
                return Ok(effects);
            }
            state.listing_pending = false;
            match result {
                Ok(entries) => {
                    state.entries = entries;
                    state.listing_error = None;
                }
                Err(err) => {
                    // The cursor keeps the new path: an empty listing with a surfaced error is
                    // honest, silently reverting would hide the navigation failure.
                    state.entries.clear();
                    let message = err.to_string();
                    state.notice = Some(Notice::error(format!(
                        "Could not load folder: {message}"
                    )));
                    state.listing_error = Some(message);
                }
            }
        }
        ArchiveAction::QueryChanged { query } => {
            state.search.query = query.clone();
            let trimmed = query.trim();
            if trimmed.chars().count() < SEARCH_MIN_QUERY_LEN {
                // Dropping the override re-exposes the retained folder listing unchanged.
                state.search.hits = None;
            } else {
                let token = next_token(state);
                state.search.token = token;
                effects.push(ArchiveEffect::FetchSearch {
                    query: trimmed.to_string(),
                    token,
                });
            }
        }
        ArchiveAction::SearchLoaded { token, result } => {
            if token != state.search.token
                || state.search.query.trim().chars().count() < SEARCH_MIN_QUERY_LEN
            {
                return Ok(effects);
            }
            match result {
                Ok(hits) => state.search.hits = Some(hits),
                Err(err) => {
                    state.notice = Some(Notice::error(format!("Search failed: {err}")));
                }
            }
        }
        ArchiveAction::OpenEntryMenu { entry, x, y } => {
            // Only one menu instance exists; opening over an existing one replaces it.
            state.context_menu = Some(ContextMenuState { entry, x, y });
        }
        ArchiveAction::CloseMenu => {
            state.context_menu = None;
        }
        ArchiveAction::MenuActionChosen { action } => {
            let menu = state.context_menu.take().ok_or(ReducerError::MenuNotOpen)?;
            let entry = menu.entry;
            match action {
                MenuAction::Download => {
                    effects.push(ArchiveEffect::OpenDownload {
                        path: entry.path,
                        force: true,
                    });
                }
                MenuAction::Rename => {
                    effects.push(ArchiveEffect::PromptRename {
                        kind: entry.kind,
                        current_name: leaf_name(&entry.path),
                        path: entry.path,
                    });
                }
                MenuAction::Translate | MenuAction::Explain => {
                    // Folders never offer these; the dispatch table already excludes them.
                    if entry.kind == ArchiveEntryKind::File {
                        let ai_action = if action == MenuAction::Translate {
                            AiAction::Translate
                        } else {
                            AiAction::Explain
                        };
                        state.ai_modal = Some(AiModalState::open(ai_action, entry.path));
                    }
                }
                MenuAction::Delete => {
                    effects.push(ArchiveEffect::ConfirmDelete {
                        kind: entry.kind,
                        path: entry.path,
                    });
                }
            }
        }
        ArchiveAction::OpenFile { path } => {
            effects.push(ArchiveEffect::OpenDownload { path, force: false });
        }
        ArchiveAction::RenameSubmitted {
            kind,
            path,
            new_name,
        } => {
            let Some(new_name) = new_name else {
                // Dismissed prompt: not an error, a no-op.
                return Ok(effects);
            };
            let trimmed = new_name.trim();
            if trimmed.is_empty() {
                state.notice = Some(Notice::error("The new name must not be empty"));
                return Ok(effects);
            }
            if trimmed == leaf_name(&path) {
                return Ok(effects);
            }
            let target = join_child(&parent_path(&path), trimmed);
            effects.push(ArchiveEffect::SubmitRename {
                kind,
                old: path,
                new: target,
            });
        }
        ArchiveAction::RenameCompleted {
            kind,
            old_path,
            result,
        } => match result {
            Ok(()) => {
                state.notice = Some(Notice::success(match kind {
                    ArchiveEntryKind::File => "File renamed",
                    ArchiveEntryKind::Folder => "Folder renamed",
                }));
                // The old path is stale either way; the parent is the folder that still exists.
                let invalidated = match kind {
                    ArchiveEntryKind::File => None,
                    ArchiveEntryKind::Folder => Some(old_path.clone()),
                };
                let parent = parent_path(&old_path);
                effects.extend(refresh_after_mutation(state, invalidated.as_deref(), &parent));
            }
            Err(err) => {
                state.notice = Some(Notice::error(format!("Rename failed: {err}")));
            }
        },
        ArchiveAction::DeleteConfirmed {
            kind,
            path,
            accepted,
        } => {
            if accepted {
                effects.push(ArchiveEffect::SubmitDelete { kind, path });
            }
        }
        ArchiveAction::DeleteCompleted { kind, path, result } => match result {
            Ok(()) => match kind {
                ArchiveEntryKind::File => {
                    state.notice = Some(Notice::success("File deleted"));
                    let current = state.cursor.path.clone();
                    effects.extend(refresh_after_mutation(state, None, &current));
                }
                ArchiveEntryKind::Folder => {
                    state.notice = Some(Notice::success("Folder deleted"));
                    let parent = parent_path(&path);
                    effects.extend(refresh_after_mutation(state, Some(&path), &parent));
                }
            },
            Err(err) => {
                state.notice = Some(Notice::error(format!("Delete failed: {err}")));
            }
        },
        ArchiveAction::UploadRequested { source, files } => {
            if files.is_empty() {
                state.notice = Some(Notice::error("Select files to upload first"));
                return Ok(effects);
            }
            state.upload_busy = true;
            effects.push(ArchiveEffect::UploadFiles { source, files });
        }
        ArchiveAction::UploadCompleted {
            source,
            filenames,
            result,
        } => {
            state.upload_busy = false;
            match result {
                Ok(()) => {
                    state.notice = Some(Notice::success("Upload complete"));
                    if source == UploadSource::DropZone {
                        effects.push(ArchiveEffect::ConfirmDeleteOriginals { filenames });
                    }
                    // Refresh whatever folder is displayed NOW; the user may have navigated
                    // away while the upload was in flight.
                    let current = state.cursor.path.clone();
                    effects.extend(refresh_after_mutation(state, None, &current));
                }
                Err(err) => {
                    state.notice = Some(Notice::error(format!("Upload failed: {err}")));
                }
            }
        }
        ArchiveAction::DeleteOriginalsConfirmed {
            filenames,
            accepted,
        } => {
            if accepted {
                state.notice = Some(Notice::success("Original files removed"));
                effects.push(ArchiveEffect::DeleteOriginals { filenames });
            } else {
                state.notice = Some(Notice::success("Original files kept"));
            }
        }
        ArchiveAction::SetAiLanguage { code } => {
            let modal = state.ai_modal.as_mut().ok_or(ReducerError::ModalNotOpen)?;
            modal.lang = code;
        }
        ArchiveAction::RunAiAction => {
            let token = next_token(state);
            let modal = state.ai_modal.as_mut().ok_or(ReducerError::ModalNotOpen)?;
            modal.token = token;
            modal.output = AiOutput::Pending;
            effects.push(ArchiveEffect::FetchAiText {
                action: modal.action,
                path: modal.path.clone(),
                lang: modal.lang.clone(),
                token,
            });
        }
        ArchiveAction::AiCompleted { token, result } => {
            let Some(modal) = state.ai_modal.as_mut() else {
                return Ok(effects);
            };
            if modal.token != token {
                return Ok(effects);
            }
            modal.output = match result {
                Ok(text) => AiOutput::Done(text),
                Err(err) => AiOutput::Failed(err.to_string()),
            };
        }
        ArchiveAction::CloseAiModal => {
            state.ai_modal = None;
        }
        ArchiveAction::DismissNotice => {
            state.notice = None;
        }
    }

    Ok(effects)
}

fn next_token(state: &mut ArchiveBrowserState) -> RequestToken {
    state.next_token = state.next_token.saturating_add(1);
    RequestToken(state.next_token)
}

/// Decides the post-mutation refresh target and stamps a fresh listing request for it.
///
/// `invalidated` is the folder a rename/delete made unreachable (with everything below it).
/// When the displayed folder is inside that subtree, the cursor re-navigates to the nearest
/// still-valid ancestor (`preferred`, the mutated folder's parent) instead of refetching a dead
/// path. A mutation that left the displayed folder intact keeps the cursor where it is.
fn refresh_after_mutation(
    state: &mut ArchiveBrowserState,
    invalidated: Option<&str>,
    preferred: &str,
) -> Vec<ArchiveEffect> {
    let target = match invalidated {
        Some(root) if is_same_or_descendant(&state.cursor.path, root) => preferred.to_string(),
        _ if state.cursor.path == preferred => preferred.to_string(),
        _ => state.cursor.path.clone(),
    };
    let token = next_token(state);
    state.cursor = NavigationCursor {
        path: target.clone(),
        token,
    };
    state.listing_pending = true;
    state.listing_error = None;
    vec![ArchiveEffect::FetchListing { path: target, token }]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(path: &str, kind: ArchiveEntryKind) -> ArchiveEntry {
        ArchiveEntry {
            name: leaf_name(path),
            path: path.to_string(),
            kind,
        }
    }

    fn navigate(state: &mut ArchiveBrowserState, raw: &str) -> RequestToken {
        let effects = reduce_archive(
            state,
            ArchiveAction::Navigate {
                raw: raw.to_string(),
            },
        )
        .expect("navigate");
        match effects.as_slice() {
            [ArchiveEffect::FetchListing { token, .. }] => *token,
            other => panic!("expected a single listing fetch, got {other:?}"),
        }
    }

    fn load_listing(state: &mut ArchiveBrowserState, token: RequestToken, entries: Vec<ArchiveEntry>) {
        reduce_archive(
            state,
            ArchiveAction::ListingLoaded {
                token,
                result: Ok(entries),
            },
        )
        .expect("listing loaded");
    }

    #[test]
    fn navigate_normalizes_and_stamps_the_cursor() {
        let mut state = ArchiveBrowserState::default();
        let token = navigate(&mut state, "2024\\Acme\\");

        assert_eq!(state.cursor.path, "Archive/2024/Acme");
        assert_eq!(state.cursor.token, token);
        assert!(state.listing_pending);
    }

    #[test]
    fn navigate_with_empty_input_targets_the_root() {
        let mut state = ArchiveBrowserState::default();
        let effects = reduce_archive(
            &mut state,
            ArchiveAction::Navigate { raw: String::new() },
        )
        .expect("navigate");

        assert_eq!(state.cursor.path, "Archive");
        assert_eq!(
            effects,
            vec![ArchiveEffect::FetchListing {
                path: "Archive".to_string(),
                token: state.cursor.token,
            }]
        );
    }

    #[test]
    fn stale_listing_responses_are_dropped() {
        let mut state = ArchiveBrowserState::default();
        let first = navigate(&mut state, "Archive/2024");
        let second = navigate(&mut state, "Archive/2025");

        // The late response for the superseded navigation must not win.
        load_listing(
            &mut state,
            first,
            vec![entry("Archive/2024/old.pdf", ArchiveEntryKind::File)],
        );
        assert!(state.entries.is_empty());
        assert!(state.listing_pending);

        load_listing(
            &mut state,
            second,
            vec![entry("Archive/2025/new.pdf", ArchiveEntryKind::File)],
        );
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].path, "Archive/2025/new.pdf");
        assert!(!state.listing_pending);
    }

    #[test]
    fn failed_navigation_keeps_the_cursor_and_surfaces_the_error() {
        let mut state = ArchiveBrowserState::default();
        let token = navigate(&mut state, "Archive/missing");

        reduce_archive(
            &mut state,
            ArchiveAction::ListingLoaded {
                token,
                result: Err(ArchiveError::backend(404, "path not found")),
            },
        )
        .expect("listing error");

        assert_eq!(state.cursor.path, "Archive/missing");
        assert!(state.entries.is_empty());
        assert!(state.listing_error.is_some());
        assert!(matches!(
            state.notice,
            Some(Notice {
                kind: crate::model::NoticeKind::Error,
                ..
            })
        ));
    }

    #[test]
    fn short_queries_drop_the_override_and_restore_the_listing() {
        let mut state = ArchiveBrowserState::default();
        let token = navigate(&mut state, "Archive/Finance");
        let retained = vec![entry("Archive/Finance/invoice.pdf", ArchiveEntryKind::File)];
        load_listing(&mut state, token, retained.clone());

        let effects = reduce_archive(
            &mut state,
            ArchiveAction::QueryChanged {
                query: "inv".to_string(),
            },
        )
        .expect("query");
        let search_token = match effects.as_slice() {
            [ArchiveEffect::FetchSearch { token, query }] => {
                assert_eq!(query, "inv");
                *token
            }
            other => panic!("expected a search fetch, got {other:?}"),
        };

        reduce_archive(
            &mut state,
            ArchiveAction::SearchLoaded {
                token: search_token,
                result: Ok(vec![SearchHit {
                    filename: "invoice.pdf".to_string(),
                    institution: "Acme".to_string(),
                    year: 2023,
                    path: "Archive/Finance/invoice.pdf".to_string(),
                }]),
            },
        )
        .expect("search loaded");
        assert!(state.search.override_active());
        assert_eq!(state.cursor.path, "Archive/Finance");

        // Clearing the query must reproduce the prior folder view without a refetch.
        let effects = reduce_archive(
            &mut state,
            ArchiveAction::QueryChanged {
                query: "i".to_string(),
            },
        )
        .expect("clear query");
        assert!(effects.is_empty());
        assert!(!state.search.override_active());
        assert_eq!(state.entries, retained);
        assert_eq!(state.cursor.path, "Archive/Finance");
    }

    #[test]
    fn stale_search_responses_are_dropped() {
        let mut state = ArchiveBrowserState::default();
        reduce_archive(
            &mut state,
            ArchiveAction::QueryChanged {
                query: "inv".to_string(),
            },
        )
        .expect("first query");
        let stale = state.search.token;
        reduce_archive(
            &mut state,
            ArchiveAction::QueryChanged {
                query: "invo".to_string(),
            },
        )
        .expect("second query");

        reduce_archive(
            &mut state,
            ArchiveAction::SearchLoaded {
                token: stale,
                result: Ok(vec![SearchHit {
                    filename: "stale.pdf".to_string(),
                    institution: "Old".to_string(),
                    year: 2020,
                    path: "Archive/stale.pdf".to_string(),
                }]),
            },
        )
        .expect("stale search");
        assert!(!state.search.override_active());
    }

    #[test]
    fn opening_a_second_menu_replaces_the_first() {
        let mut state = ArchiveBrowserState::default();
        reduce_archive(
            &mut state,
            ArchiveAction::OpenEntryMenu {
                entry: entry("Archive/a.pdf", ArchiveEntryKind::File),
                x: 10,
                y: 10,
            },
        )
        .expect("open first");
        reduce_archive(
            &mut state,
            ArchiveAction::OpenEntryMenu {
                entry: entry("Archive/2024", ArchiveEntryKind::Folder),
                x: 40,
                y: 40,
            },
        )
        .expect("open second");

        let menu = state.context_menu.as_ref().expect("menu open");
        assert_eq!(menu.entry.path, "Archive/2024");
        assert_eq!(menu.actions(), &[MenuAction::Rename, MenuAction::Delete]);
    }

    #[test]
    fn menu_actions_without_an_open_menu_are_reducer_errors() {
        let mut state = ArchiveBrowserState::default();
        let err = reduce_archive(
            &mut state,
            ArchiveAction::MenuActionChosen {
                action: MenuAction::Delete,
            },
        )
        .expect_err("menu not open");
        assert_eq!(err, ReducerError::MenuNotOpen);
    }

    #[test]
    fn rename_submission_builds_the_target_under_the_old_parent() {
        let mut state = ArchiveBrowserState::default();
        let effects = reduce_archive(
            &mut state,
            ArchiveAction::RenameSubmitted {
                kind: ArchiveEntryKind::File,
                path: "Archive/2024/scan.pdf".to_string(),
                new_name: Some("invoice.pdf".to_string()),
            },
        )
        .expect("rename");

        assert_eq!(
            effects,
            vec![ArchiveEffect::SubmitRename {
                kind: ArchiveEntryKind::File,
                old: "Archive/2024/scan.pdf".to_string(),
                new: "Archive/2024/invoice.pdf".to_string(),
            }]
        );
    }

    #[test]
    fn cancelled_and_empty_rename_submissions_send_nothing() {
        let mut state = ArchiveBrowserState::default();
        let effects = reduce_archive(
            &mut state,
            ArchiveAction::RenameSubmitted {
                kind: ArchiveEntryKind::File,
                path: "Archive/a.pdf".to_string(),
                new_name: None,
            },
        )
        .expect("cancelled rename");
        assert!(effects.is_empty());
        assert!(state.notice.is_none());

        let effects = reduce_archive(
            &mut state,
            ArchiveAction::RenameSubmitted {
                kind: ArchiveEntryKind::File,
                path: "Archive/a.pdf".to_string(),
                new_name: Some("   ".to_string()),
            },
        )
        .expect("empty rename");
        assert!(effects.is_empty());
        assert!(state.notice.is_some());
    }

    #[test]
    fn renaming_a_file_refreshes_the_parent_without_moving_the_cursor() {
        let mut state = ArchiveBrowserState::default();
        let token = navigate(&mut state, "Archive/2024");
        load_listing(&mut state, token, Vec::new());

        let effects = reduce_archive(
            &mut state,
            ArchiveAction::RenameCompleted {
                kind: ArchiveEntryKind::File,
                old_path: "Archive/2024/scan.pdf".to_string(),
                result: Ok(()),
            },
        )
        .expect("rename completed");

        assert_eq!(state.cursor.path, "Archive/2024");
        assert_eq!(
            effects,
            vec![ArchiveEffect::FetchListing {
                path: "Archive/2024".to_string(),
                token: state.cursor.token,
            }]
        );
    }

    #[test]
    fn renaming_the_viewed_folder_navigates_to_its_parent() {
        let mut state = ArchiveBrowserState::default();
        let token = navigate(&mut state, "Archive/2024");
        load_listing(&mut state, token, Vec::new());

        let effects = reduce_archive(
            &mut state,
            ArchiveAction::RenameCompleted {
                kind: ArchiveEntryKind::Folder,
                old_path: "Archive/2024".to_string(),
                result: Ok(()),
            },
        )
        .expect("rename completed");

        assert_eq!(state.cursor.path, "Archive");
        assert_eq!(
            effects,
            vec![ArchiveEffect::FetchListing {
                path: "Archive".to_string(),
                token: state.cursor.token,
            }]
        );
    }

    #[test]
    fn deleting_the_viewed_folders_ancestor_navigates_to_the_nearest_valid_ancestor() {
        let mut state = ArchiveBrowserState::default();
        let token = navigate(&mut state, "Archive/2024/Acme/Invoices");
        load_listing(&mut state, token, Vec::new());

        reduce_archive(
            &mut state,
            ArchiveAction::DeleteCompleted {
                kind: ArchiveEntryKind::Folder,
                path: "Archive/2024/Acme".to_string(),
                result: Ok(()),
            },
        )
        .expect("delete completed");

        assert_eq!(state.cursor.path, "Archive/2024");
    }

    #[test]
    fn deleting_a_file_refreshes_the_displayed_folder() {
        let mut state = ArchiveBrowserState::default();
        let token = navigate(&mut state, "Archive/Finance");
        load_listing(&mut state, token, Vec::new());

        let effects = reduce_archive(
            &mut state,
            ArchiveAction::DeleteCompleted {
                kind: ArchiveEntryKind::File,
                path: "Archive/Finance/invoice.pdf".to_string(),
                result: Ok(()),
            },
        )
        .expect("delete completed");

        assert_eq!(state.cursor.path, "Archive/Finance");
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn declined_delete_confirmation_is_a_no_op() {
        let mut state = ArchiveBrowserState::default();
        let effects = reduce_archive(
            &mut state,
            ArchiveAction::DeleteConfirmed {
                kind: ArchiveEntryKind::Folder,
                path: "Archive/2024".to_string(),
                accepted: false,
            },
        )
        .expect("declined");
        assert!(effects.is_empty());
        assert!(state.notice.is_none());
    }

    #[test]
    fn failed_mutations_leave_the_view_untouched() {
        let mut state = ArchiveBrowserState::default();
        let token = navigate(&mut state, "Archive/2024");
        let retained = vec![entry("Archive/2024/scan.pdf", ArchiveEntryKind::File)];
        load_listing(&mut state, token, retained.clone());

        let effects = reduce_archive(
            &mut state,
            ArchiveAction::DeleteCompleted {
                kind: ArchiveEntryKind::File,
                path: "Archive/2024/scan.pdf".to_string(),
                result: Err(ArchiveError::backend(500, "delete failed")),
            },
        )
        .expect("failed delete");

        assert!(effects.is_empty());
        assert_eq!(state.entries, retained);
        assert_eq!(state.cursor.path, "Archive/2024");
        assert!(state.notice.is_some());
    }

    #[test]
    fn empty_upload_submission_surfaces_a_notice() {
        let mut state = ArchiveBrowserState::default();
        let effects = reduce_archive(
            &mut state,
            ArchiveAction::UploadRequested {
                source: UploadSource::Form,
                files: Vec::new(),
            },
        )
        .expect("empty upload");
        assert!(effects.is_empty());
        assert!(!state.upload_busy);
        assert!(state.notice.is_some());
    }

    #[test]
    fn drop_zone_uploads_offer_original_cleanup_and_refresh_the_current_folder() {
        let mut state = ArchiveBrowserState::default();
        let token = navigate(&mut state, "Archive/Inbox");
        load_listing(&mut state, token, Vec::new());

        let effects = reduce_archive(
            &mut state,
            ArchiveAction::UploadCompleted {
                source: UploadSource::DropZone,
                filenames: vec!["scan.pdf".to_string()],
                result: Ok(()),
            },
        )
        .expect("upload completed");

        assert_eq!(
            effects[0],
            ArchiveEffect::ConfirmDeleteOriginals {
                filenames: vec!["scan.pdf".to_string()],
            }
        );
        assert!(matches!(
            effects[1],
            ArchiveEffect::FetchListing { ref path, .. } if path == "Archive/Inbox"
        ));
        assert!(!state.upload_busy);
    }

    #[test]
    fn upload_refresh_targets_the_folder_displayed_at_completion_time() {
        let mut state = ArchiveBrowserState::default();
        let token = navigate(&mut state, "Archive/Inbox");
        load_listing(&mut state, token, Vec::new());
        reduce_archive(
            &mut state,
            ArchiveAction::UploadRequested {
                source: UploadSource::Form,
                files: vec![UploadFile {
                    name: "scan.pdf".to_string(),
                    mime_type: "application/pdf".to_string(),
                    bytes: vec![1, 2, 3],
                }],
            },
        )
        .expect("upload requested");

        // The user navigates away while the upload is still in flight.
        let token = navigate(&mut state, "Archive/2024");
        load_listing(&mut state, token, Vec::new());

        let effects = reduce_archive(
            &mut state,
            ArchiveAction::UploadCompleted {
                source: UploadSource::Form,
                filenames: vec!["scan.pdf".to_string()],
                result: Ok(()),
            },
        )
        .expect("upload completed");

        assert!(matches!(
            effects.as_slice(),
            [ArchiveEffect::FetchListing { path, .. }] if path == "Archive/2024"
        ));
    }

    #[test]
    fn translate_menu_action_opens_the_modal_and_run_stamps_a_token() {
        let mut state = ArchiveBrowserState::default();
        reduce_archive(
            &mut state,
            ArchiveAction::OpenEntryMenu {
                entry: entry("Archive/doc.pdf", ArchiveEntryKind::File),
                x: 0,
                y: 0,
            },
        )
        .expect("open menu");
        reduce_archive(
            &mut state,
            ArchiveAction::MenuActionChosen {
                action: MenuAction::Translate,
            },
        )
        .expect("choose translate");

        assert!(state.context_menu.is_none());
        let modal = state.ai_modal.as_ref().expect("modal open");
        assert_eq!(modal.action, AiAction::Translate);
        assert_eq!(modal.output, AiOutput::Idle);

        let effects = reduce_archive(&mut state, ArchiveAction::RunAiAction).expect("run");
        let token = match effects.as_slice() {
            [ArchiveEffect::FetchAiText { token, lang, .. }] => {
                assert_eq!(lang, archive_host::DEFAULT_LANGUAGE_CODE);
                *token
            }
            other => panic!("expected an AI fetch, got {other:?}"),
        };
        assert_eq!(state.ai_modal.as_ref().expect("modal").output, AiOutput::Pending);

        reduce_archive(
            &mut state,
            ArchiveAction::AiCompleted {
                token,
                result: Ok("Translated text".to_string()),
            },
        )
        .expect("ai completed");
        assert_eq!(
            state.ai_modal.as_ref().expect("modal").output,
            AiOutput::Done("Translated text".to_string())
        );
    }

    #[test]
    fn stale_ai_responses_never_overwrite_a_newer_run() {
        let mut state = ArchiveBrowserState::default();
        state.ai_modal = Some(AiModalState::open(AiAction::Explain, "Archive/doc.pdf"));

        let stale = match reduce_archive(&mut state, ArchiveAction::RunAiAction)
            .expect("first run")
            .as_slice()
        {
            [ArchiveEffect::FetchAiText { token, .. }] => *token,
            other => panic!("expected an AI fetch, got {other:?}"),
        };
        reduce_archive(&mut state, ArchiveAction::RunAiAction).expect("second run");

        reduce_archive(
            &mut state,
            ArchiveAction::AiCompleted {
                token: stale,
                result: Ok("stale".to_string()),
            },
        )
        .expect("stale ai response");
        assert_eq!(state.ai_modal.as_ref().expect("modal").output, AiOutput::Pending);
    }

    #[test]
    fn ai_actions_without_an_open_modal_are_reducer_errors() {
        let mut state = ArchiveBrowserState::default();
        let err = reduce_archive(&mut state, ArchiveAction::RunAiAction).expect_err("no modal");
        assert_eq!(err, ReducerError::ModalNotOpen);
    }
}
