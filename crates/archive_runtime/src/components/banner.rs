use super::*;

#[component]
pub(super) fn NoticeBanner(
    state: RwSignal<ArchiveBrowserState>,
    runtime: ArchiveRuntimeContext,
) -> impl IntoView {
    view! {
        <Show when=move || state.get().notice.is_some() fallback=|| ()>
            {move || {
                let Some(notice) = state.get().notice else {
                    return ().into_view();
                };
                let class = match notice.kind {
                    NoticeKind::Success => "banner success",
                    NoticeKind::Error => "banner error",
                };

                view! {
                    <div class=class role="status">
                        <span class="banner-text">{notice.text.clone()}</span>
                        <button
                            type="button"
                            class="banner-close"
                            aria-label="Dismiss notice"
                            on:click=move |_| runtime.dispatch_action(ArchiveAction::DismissNotice)
                        >
                            "\u{00d7}"
                        </button>
                    </div>
                }
                    .into_view()
            }}
        </Show>
    }
}
