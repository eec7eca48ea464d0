//! Archive shell UI composition and interaction surfaces.

mod banner;
mod breadcrumb;
mod listing;
mod menus;
mod modals;
mod upload;

use leptos::*;

use archive_host::{ArchiveEntryKind, UploadFile, SUPPORTED_LANGUAGES};

use crate::model::{
    breadcrumb_segments, search_hit_label, AiOutput, ArchiveBrowserState, NoticeKind, UploadSource,
};
use crate::reducer::ArchiveAction;

use self::{
    banner::NoticeBanner, breadcrumb::BreadcrumbTrail, listing::ListingView,
    menus::EntryContextMenu, modals::AiActionModal, upload::UploadPanel,
};

pub use crate::runtime_context::{use_archive_runtime, ArchiveProvider, ArchiveRuntimeContext};

#[component]
/// Root shell of the archive browser: header with search, upload surfaces, breadcrumb, listing,
/// and the transient menu/modal/banner layers.
pub fn ArchiveShell() -> impl IntoView {
    let runtime = use_archive_runtime();
    let state = runtime.state;

    view! {
        <div
            class="archive-shell"
            on:mousedown=move |_| {
                // Click anywhere outside the menu closes it; the menu stops propagation.
                if state.get_untracked().context_menu.is_some() {
                    runtime.dispatch_action(ArchiveAction::CloseMenu);
                }
            }
        >
            <NoticeBanner state=state runtime=runtime />

            <header class="archive-header">
                <h1>"Document Archive"</h1>
                <SearchBox state=state runtime=runtime />
            </header>

            <UploadPanel state=state runtime=runtime />
            <BreadcrumbTrail state=state runtime=runtime />
            <ListingView state=state runtime=runtime />

            <EntryContextMenu state=state runtime=runtime />
            <AiActionModal state=state runtime=runtime />
        </div>
    }
}

#[component]
fn SearchBox(
    state: RwSignal<ArchiveBrowserState>,
    runtime: ArchiveRuntimeContext,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="archive-search"
            placeholder="Search the archive..."
            aria-label="Search the archive"
            prop:value=move || state.get().search.query
            on:input=move |ev| {
                runtime.dispatch_action(ArchiveAction::QueryChanged {
                    query: event_target_value(&ev),
                });
            }
        />
    }
}
