use super::*;

#[component]
pub(super) fn AiActionModal(
    state: RwSignal<ArchiveBrowserState>,
    runtime: ArchiveRuntimeContext,
) -> impl IntoView {
    view! {
        <Show when=move || state.get().ai_modal.is_some() fallback=|| ()>
            {move || {
                let Some(modal) = state.get().ai_modal else {
                    return ().into_view();
                };
                let pending = modal.output == AiOutput::Pending;
                let output_text = match &modal.output {
                    AiOutput::Idle => String::new(),
                    // Transient pending message while the request is outstanding.
                    AiOutput::Pending => format!("{}...", modal.action.label()),
                    AiOutput::Done(text) => text.clone(),
                    AiOutput::Failed(message) => message.clone(),
                };
                let action_label = modal.action.label();

                view! {
                    <div class="modal" role="dialog" aria-label=format!("{action_label} {}", modal.path)>
                        <div class="modal-content">
                            <label class="modal-lang-label">
                                <b>"Choose a language:"</b>
                                <select
                                    class="modal-lang-select"
                                    on:change=move |ev| {
                                        runtime.dispatch_action(ArchiveAction::SetAiLanguage {
                                            code: event_target_value(&ev),
                                        });
                                    }
                                >
                                    {SUPPORTED_LANGUAGES
                                        .iter()
                                        .map(|lang| {
                                            let is_selected = lang.code == modal.lang;
                                            view! {
                                                <option value=lang.code selected=is_selected>
                                                    {format!("{} ({})", lang.name, lang.code)}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </label>

                            <textarea class="modal-output" readonly prop:value=output_text></textarea>

                            <div class="modal-buttons">
                                <button
                                    type="button"
                                    disabled=pending
                                    on:click=move |_| runtime.dispatch_action(ArchiveAction::RunAiAction)
                                >
                                    {action_label}
                                </button>
                                <button
                                    type="button"
                                    on:click=move |_| runtime.dispatch_action(ArchiveAction::CloseAiModal)
                                >
                                    "Close"
                                </button>
                            </div>
                        </div>
                    </div>
                }
                    .into_view()
            }}
        </Show>
    }
}
