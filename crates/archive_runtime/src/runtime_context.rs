//! Runtime provider and context wiring for the archive browser shell.
//!
//! This module owns the long-lived reducer container and the runtime effect queue. UI
//! composition stays in [`crate::components`].

use leptos::*;

use crate::{
    effect_executor,
    host::ArchiveHostContext,
    model::ArchiveBrowserState,
    reducer::{reduce_archive, ArchiveAction, ArchiveEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading archive browser state and dispatching [`ArchiveAction`] values.
pub struct ArchiveRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<ArchiveHostContext>,
    /// Reactive archive browser state signal; the reducer is its only writer.
    pub state: RwSignal<ArchiveBrowserState>,
    /// Queue of effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<ArchiveEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ArchiveAction>,
}

impl ArchiveRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ArchiveAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`ArchiveRuntimeContext`] to descendant components and boots the root listing.
pub fn ArchiveProvider(children: Children) -> impl IntoView {
    let host = store_value(ArchiveHostContext::default());
    let state = create_rw_signal(ArchiveBrowserState::default());
    let effects = create_rw_signal(Vec::<ArchiveEffect>::new());

    let dispatch = Callback::new(move |action: ArchiveAction| {
        let mut browser = state.get_untracked();
        let previous = browser.clone();

        match reduce_archive(&mut browser, action) {
            Ok(new_effects) => {
                if browser != previous {
                    state.set(browser);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("archive reducer error: {err}"),
        }
    });

    let runtime = ArchiveRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);

    // Initial load: the empty path resolves to the archive root.
    runtime.dispatch_action(ArchiveAction::Navigate { raw: String::new() });

    children().into_view()
}

/// Returns the current [`ArchiveRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ArchiveProvider`].
pub fn use_archive_runtime() -> ArchiveRuntimeContext {
    use_context::<ArchiveRuntimeContext>().expect("ArchiveRuntimeContext not provided")
}
