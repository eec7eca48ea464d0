use super::*;

#[component]
pub(super) fn ListingView(
    state: RwSignal<ArchiveBrowserState>,
    runtime: ArchiveRuntimeContext,
) -> impl IntoView {
    view! {
        <section class="archive-listing" aria-label="Folder contents">
            <Show
                when=move || state.get().search.override_active()
                fallback=move || view! { <FolderListing state=state runtime=runtime /> }
            >
                <SearchResults state=state runtime=runtime />
            </Show>
        </section>
    }
}

#[component]
fn FolderListing(
    state: RwSignal<ArchiveBrowserState>,
    runtime: ArchiveRuntimeContext,
) -> impl IntoView {
    view! {
        {move || {
            let browser = state.get();
            if let Some(message) = browser.listing_error {
                return view! {
                    <p class="listing-status error">
                        {format!("Could not display this folder: {message}")}
                    </p>
                }
                    .into_view();
            }
            if browser.listing_pending && browser.entries.is_empty() {
                return view! { <p class="listing-status">"Loading..."</p> }.into_view();
            }
            if browser.entries.is_empty() {
                return view! { <p class="listing-status">"This folder is empty."</p> }.into_view();
            }

            view! {
                <ul class="entry-list">
                    {browser
                        .entries
                        .into_iter()
                        .map(|entry| view! { <EntryRow entry=entry runtime=runtime /> })
                        .collect_view()}
                </ul>
            }
                .into_view()
        }}
    }
}

#[component]
fn EntryRow(entry: archive_host::ArchiveEntry, runtime: ArchiveRuntimeContext) -> impl IntoView {
    let icon = if entry.kind.is_folder() { "\u{1f4c2}" } else { "\u{1f4c4}" };
    let name = entry.name.clone();
    let open_entry = entry.clone();
    let menu_entry = entry;

    view! {
        <li
            class="entry-row"
            on:dblclick=move |_| {
                if open_entry.kind == ArchiveEntryKind::Folder {
                    runtime.dispatch_action(ArchiveAction::Navigate {
                        raw: open_entry.path.clone(),
                    });
                } else {
                    runtime.dispatch_action(ArchiveAction::OpenFile {
                        path: open_entry.path.clone(),
                    });
                }
            }
            on:contextmenu=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                runtime.dispatch_action(ArchiveAction::OpenEntryMenu {
                    entry: menu_entry.clone(),
                    x: ev.page_x(),
                    y: ev.page_y(),
                });
            }
        >
            <span class="entry-icon" aria-hidden="true">{icon}</span>
            <span class="entry-name">{name}</span>
        </li>
    }
}

#[component]
fn SearchResults(
    state: RwSignal<ArchiveBrowserState>,
    runtime: ArchiveRuntimeContext,
) -> impl IntoView {
    view! {
        {move || {
            let hits = state.get().search.hits.unwrap_or_default();
            if hits.is_empty() {
                return view! { <p class="listing-status">"No matching documents."</p> }
                    .into_view();
            }

            // Search results are never folders; every hit opens the file directly.
            view! {
                <ul class="entry-list search-results">
                    {hits
                        .into_iter()
                        .map(|hit| {
                            let label = search_hit_label(&hit);
                            let path = hit.path;
                            view! {
                                <li class="entry-row search-hit">
                                    <button
                                        type="button"
                                        class="search-hit-link"
                                        on:click=move |_| {
                                            runtime.dispatch_action(ArchiveAction::OpenFile {
                                                path: path.clone(),
                                            });
                                        }
                                    >
                                        <span class="entry-icon" aria-hidden="true">"\u{1f4c4}"</span>
                                        {label}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
                .into_view()
        }}
    }
}
