use archive_runtime::{ArchiveProvider, ArchiveShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Document Archive" />
        <Meta name="description" content="Browser client for the document archive service." />

        <main class="site-root">
            <ArchiveProvider>
                <ArchiveShell />
            </ArchiveProvider>
        </main>
    }
}
