use super::*;

use leptos::html::Input;

#[component]
pub(super) fn UploadPanel(
    state: RwSignal<ArchiveBrowserState>,
    runtime: ArchiveRuntimeContext,
) -> impl IntoView {
    let selected = create_rw_signal(Vec::<UploadFile>::new());
    let drag_active = create_rw_signal(false);
    let file_input = create_node_ref::<Input>();

    let submit = move |_| {
        let files = selected.get_untracked();
        selected.set(Vec::new());
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
        runtime.dispatch_action(ArchiveAction::UploadRequested {
            source: UploadSource::Form,
            files,
        });
    };

    view! {
        <section class="upload-panel" aria-label="Upload documents">
            <div class="upload-form">
                <input
                    type="file"
                    multiple
                    node_ref=file_input
                    aria-label="Choose documents to upload"
                    on:change=move |ev| {
                        let input: web_sys::HtmlInputElement = event_target(&ev);
                        let Some(files) = input.files() else {
                            return;
                        };
                        spawn_local(async move {
                            match archive_host_web::read_file_list(&files).await {
                                Ok(payloads) => selected.set(payloads),
                                Err(err) => logging::warn!("reading picked files failed: {err}"),
                            }
                        });
                    }
                />
                <button
                    type="button"
                    class="upload-submit"
                    disabled=move || selected.get().is_empty() || state.get().upload_busy
                    on:click=submit
                >
                    "Import"
                </button>
                <Show when=move || state.get().upload_busy fallback=|| ()>
                    <span class="upload-loader" role="status">"Uploading..."</span>
                </Show>
            </div>

            <Show when=move || !selected.get().is_empty() fallback=|| ()>
                <ul class="selected-files">
                    {move || {
                        selected
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, file)| {
                                let size_kb = file.bytes.len() / 1024;
                                view! {
                                    <li>
                                        <span>{format!("{} ({size_kb} KB)", file.name)}</span>
                                        <button
                                            type="button"
                                            class="selected-file-remove"
                                            aria-label=format!("Remove {}", file.name)
                                            on:click=move |_| {
                                                selected.update(|files| {
                                                    files.remove(index);
                                                });
                                            }
                                        >
                                            "\u{2716}"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>

            <div
                class=move || {
                    if drag_active.get() { "drop-zone dragover" } else { "drop-zone" }
                }
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    drag_active.set(true);
                }
                on:dragleave=move |_| drag_active.set(false)
                on:drop=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    drag_active.set(false);
                    let Some(files) = ev.data_transfer().and_then(|transfer| transfer.files())
                    else {
                        return;
                    };
                    if files.length() == 0 {
                        return;
                    }
                    spawn_local(async move {
                        match archive_host_web::read_file_list(&files).await {
                            Ok(payloads) => {
                                runtime.dispatch_action(ArchiveAction::UploadRequested {
                                    source: UploadSource::DropZone,
                                    files: payloads,
                                });
                            }
                            Err(err) => logging::warn!("reading dropped files failed: {err}"),
                        }
                    });
                }
            >
                "Drop documents here to upload them"
            </div>
        </section>
    }
}
