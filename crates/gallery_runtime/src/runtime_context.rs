//! Runtime provider and context wiring for the gallery page.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and host wiring.
//! UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;

use crate::{
    effect_executor,
    host::GalleryHostContext,
    manifest::gallery_manifest,
    model::GalleryState,
    reducer::{reduce_gallery_with_feedback, GalleryAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading gallery state and dispatching [`GalleryAction`] values.
pub struct GalleryRuntimeContext {
    /// Host service bundle for executing runtime side effects and page queries.
    pub host: StoredValue<GalleryHostContext>,
    /// Reactive gallery state signal.
    pub state: RwSignal<GalleryState>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<GalleryAction>,
}

impl GalleryRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: GalleryAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`GalleryRuntimeContext`] to descendant components, seeded from the bundled manifest.
pub fn GalleryProvider(children: Children) -> impl IntoView {
    let host = store_value(GalleryHostContext::default());
    let state = create_rw_signal(gallery_manifest().initial_state());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    logging::log!(
        "gallery runtime ready: {} entries, host strategy `{}`",
        state.with_untracked(|gallery| gallery.catalog.len()),
        host.with_value(|host| host.host_strategy_name())
    );

    let dispatch = Callback::new(move |action: GalleryAction| {
        let mut gallery = state.get_untracked();
        let previous = gallery.clone();

        match reduce_gallery_with_feedback(&mut gallery, action) {
            Ok(new_effects) => {
                let (pre_render, queued): (Vec<_>, Vec<_>) = new_effects
                    .into_iter()
                    .partition(RuntimeEffect::runs_before_render);
                host.with_value(|host| {
                    for effect in &pre_render {
                        host.run_pre_render_effect(effect);
                    }
                });
                if gallery != previous {
                    state.set(gallery);
                }
                if !queued.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(queued);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("gallery reducer error: {err}"),
        }
    });

    let runtime = GalleryRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`GalleryRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`GalleryProvider`].
pub fn use_gallery_runtime() -> GalleryRuntimeContext {
    use_context::<GalleryRuntimeContext>().expect("GalleryRuntimeContext not provided")
}
