use archive_host::{
    normalize_archive_path, ArchiveEntry, ArchiveEntryKind, SearchHit, DEFAULT_LANGUAGE_CODE,
};

/// Monotonic token stamped on every in-flight request family (listings, search, AI output).
///
/// A response is applied only while its token still matches the latest one issued for that
/// family, so a late response from a superseded request can never overwrite newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(pub u64);

#[derive(Debug, Clone, PartialEq)]
/// The single current-folder value driving the visible listing and breadcrumb.
pub struct NavigationCursor {
    /// Canonical path of the folder currently displayed.
    pub path: String,
    /// Token of the listing request that may populate this cursor.
    pub token: RequestToken,
}

impl Default for NavigationCursor {
    fn default() -> Self {
        Self {
            path: archive_host::ARCHIVE_ROOT.to_string(),
            token: RequestToken::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Severity of a transient banner notice.
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
/// Transient banner notice surfaced to the user.
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Context-menu action descriptor; menu items are built from these, never from generated markup.
pub enum MenuAction {
    Download,
    Rename,
    Translate,
    Explain,
    Delete,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Download => "Download",
            Self::Rename => "Rename",
            Self::Translate => "Translate",
            Self::Explain => "Explain",
            Self::Delete => "Delete",
        }
    }
}

const FILE_MENU_ACTIONS: [MenuAction; 5] = [
    MenuAction::Download,
    MenuAction::Rename,
    MenuAction::Translate,
    MenuAction::Explain,
    MenuAction::Delete,
];

const FOLDER_MENU_ACTIONS: [MenuAction; 2] = [MenuAction::Rename, MenuAction::Delete];

#[derive(Debug, Clone, PartialEq)]
/// The single open context menu. Opening a second menu replaces the first.
pub struct ContextMenuState {
    /// Entry under the pointer when the menu was opened.
    pub entry: ArchiveEntry,
    pub x: i32,
    pub y: i32,
}

impl ContextMenuState {
    /// Action set for the target kind: folders support rename/delete only.
    pub fn actions(&self) -> &'static [MenuAction] {
        match self.entry.kind {
            ArchiveEntryKind::File => &FILE_MENU_ACTIONS,
            ArchiveEntryKind::Folder => &FOLDER_MENU_ACTIONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// AI action backing the translate/explain modal.
pub enum AiAction {
    Translate,
    Explain,
}

impl AiAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Translate => "Translate",
            Self::Explain => "Explain",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Output area state of the translate/explain modal.
pub enum AiOutput {
    Idle,
    Pending,
    Done(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
/// The single open translate/explain modal.
pub struct AiModalState {
    pub action: AiAction,
    /// Canonical path of the target file.
    pub path: String,
    /// Selected language code, passed through verbatim.
    pub lang: String,
    pub output: AiOutput,
    /// Token of the AI request that may populate the output.
    pub token: RequestToken,
}

impl AiModalState {
    pub fn open(action: AiAction, path: impl Into<String>) -> Self {
        Self {
            action,
            path: path.into(),
            lang: DEFAULT_LANGUAGE_CODE.to_string(),
            output: AiOutput::Idle,
            token: RequestToken::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Search input state plus the ephemeral result override.
///
/// The override substitutes for the live listing while a long-enough query is active; it never
/// touches the cursor, so dropping it restores the retained folder view unchanged.
pub struct SearchState {
    /// Raw query text as typed.
    pub query: String,
    /// Search results currently overriding the folder listing.
    pub hits: Option<Vec<SearchHit>>,
    /// Token of the search request that may populate the override.
    pub token: RequestToken,
}

impl SearchState {
    pub fn override_active(&self) -> bool {
        self.hits.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where an upload batch came from; drag-and-drop uploads offer original-file cleanup afterwards.
pub enum UploadSource {
    Form,
    DropZone,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Complete runtime state of the archive browser, owned by the provider and mutated exclusively
/// through [`crate::reducer::reduce_archive`].
pub struct ArchiveBrowserState {
    pub cursor: NavigationCursor,
    /// Children of the cursor folder from the most recent applied listing.
    pub entries: Vec<ArchiveEntry>,
    /// Error surfaced when the cursor's listing failed to load.
    pub listing_error: Option<String>,
    /// A listing request for the cursor is outstanding.
    pub listing_pending: bool,
    pub search: SearchState,
    pub context_menu: Option<ContextMenuState>,
    pub ai_modal: Option<AiModalState>,
    pub notice: Option<Notice>,
    /// An upload batch is outstanding.
    pub upload_busy: bool,
    /// Source of the most recently issued request token.
    pub next_token: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One clickable breadcrumb segment.
pub struct BreadcrumbSegment {
    /// Segment label as displayed.
    pub label: String,
    /// Canonical navigation target for this segment.
    pub target: String,
}

/// Derives the clickable breadcrumb trail for a canonical path.
///
/// Segment 0 is always the archive root marker; segment `i` targets the canonical prefix ending
/// at `i`.
pub fn breadcrumb_segments(path: &str) -> Vec<BreadcrumbSegment> {
    let canonical = normalize_archive_path(path);
    let mut segments = Vec::new();
    let mut prefix = String::new();
    for part in canonical.split('/').filter(|part| !part.is_empty()) {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(part);
        segments.push(BreadcrumbSegment {
            label: part.to_string(),
            target: prefix.clone(),
        });
    }
    segments
}

/// Flat-list label for a search hit: `filename (institution, year)`.
pub fn search_hit_label(hit: &SearchHit) -> String {
    format!("{} ({}, {})", hit.filename, hit.institution, hit.year)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn breadcrumb_segments_cover_every_prefix() {
        let segments = breadcrumb_segments("Archive/2024/Acme");
        assert_eq!(
            segments,
            vec![
                BreadcrumbSegment {
                    label: "Archive".to_string(),
                    target: "Archive".to_string(),
                },
                BreadcrumbSegment {
                    label: "2024".to_string(),
                    target: "Archive/2024".to_string(),
                },
                BreadcrumbSegment {
                    label: "Acme".to_string(),
                    target: "Archive/2024/Acme".to_string(),
                },
            ]
        );
    }

    #[test]
    fn breadcrumb_for_root_is_the_single_root_segment() {
        let segments = breadcrumb_segments("");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].label, "Archive");
        assert_eq!(segments[0].target, "Archive");
    }

    #[test]
    fn breadcrumb_segment_count_matches_path_segments() {
        for (path, expected) in [("Archive", 1), ("Archive/2024", 2), ("Archive/2024/Acme/x", 4)] {
            assert_eq!(breadcrumb_segments(path).len(), expected, "path={path:?}");
        }
    }

    #[test]
    fn menu_action_sets_depend_on_entry_kind() {
        let file_menu = ContextMenuState {
            entry: ArchiveEntry {
                name: "a.pdf".to_string(),
                path: "Archive/a.pdf".to_string(),
                kind: ArchiveEntryKind::File,
            },
            x: 0,
            y: 0,
        };
        assert_eq!(file_menu.actions().len(), 5);

        let folder_menu = ContextMenuState {
            entry: ArchiveEntry {
                name: "2024".to_string(),
                path: "Archive/2024".to_string(),
                kind: ArchiveEntryKind::Folder,
            },
            x: 0,
            y: 0,
        };
        assert_eq!(
            folder_menu.actions(),
            &[MenuAction::Rename, MenuAction::Delete]
        );
    }

    #[test]
    fn search_hit_labels_show_filename_institution_and_year() {
        let hit = SearchHit {
            filename: "invoice.pdf".to_string(),
            institution: "Acme".to_string(),
            year: 2023,
            path: "Archive/Finance/invoice.pdf".to_string(),
        };
        assert_eq!(search_hit_label(&hit), "invoice.pdf (Acme, 2023)");
    }
}
