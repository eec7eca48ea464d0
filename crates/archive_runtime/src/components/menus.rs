use super::*;

#[component]
pub(super) fn EntryContextMenu(
    state: RwSignal<ArchiveBrowserState>,
    runtime: ArchiveRuntimeContext,
) -> impl IntoView {
    view! {
        <Show when=move || state.get().context_menu.is_some() fallback=|| ()>
            {move || {
                let Some(menu) = state.get().context_menu else {
                    return ().into_view();
                };
                let menu_style = format!("left:{}px;top:{}px;", menu.x, menu.y);
                let actions = menu.actions();

                view! {
                    <div
                        class="context-menu"
                        role="menu"
                        aria-label=format!("Actions for {}", menu.entry.name)
                        style=menu_style
                        on:mousedown=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                ev.prevent_default();
                                ev.stop_propagation();
                                runtime.dispatch_action(ArchiveAction::CloseMenu);
                            }
                        }
                    >
                        {actions
                            .iter()
                            .map(|action| {
                                let action = *action;
                                view! {
                                    <button
                                        type="button"
                                        role="menuitem"
                                        class="context-menu-item"
                                        on:click=move |_| {
                                            runtime.dispatch_action(ArchiveAction::MenuActionChosen {
                                                action,
                                            });
                                        }
                                    >
                                        {action.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_view()
            }}
        </Show>
    }
}
