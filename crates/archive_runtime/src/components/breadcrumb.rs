use super::*;

#[component]
pub(super) fn BreadcrumbTrail(
    state: RwSignal<ArchiveBrowserState>,
    runtime: ArchiveRuntimeContext,
) -> impl IntoView {
    view! {
        <nav class="archive-breadcrumb" aria-label="Breadcrumb">
            {move || {
                breadcrumb_segments(&state.get().cursor.path)
                    .into_iter()
                    .enumerate()
                    .map(|(index, segment)| {
                        let target = segment.target;
                        view! {
                            <span class="breadcrumb-item">
                                {(index > 0).then_some(" / ")}
                                <button
                                    type="button"
                                    class="breadcrumb-link"
                                    on:click=move |_| {
                                        runtime.dispatch_action(ArchiveAction::Navigate {
                                            raw: target.clone(),
                                        });
                                    }
                                >
                                    {segment.label}
                                </button>
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
