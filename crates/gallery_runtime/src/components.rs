//! Gallery page UI composition and interaction surfaces.

mod gallery;
mod hero;
mod media_modal;
mod navigation;
mod notifications;
mod upload;

use std::time::Duration;

use leptos::*;

use self::{
    gallery::GallerySection,
    hero::{HeroSection, MessageSection, StorySection},
    media_modal::MediaModal,
    navigation::NavigationBar,
    notifications::NotificationStack,
    upload::UploadDialogView,
};
use crate::{
    keyboard::action_for_key,
    model::EntryId,
    navigation::{ScrollThrottle, SCROLL_THROTTLE_MS},
    reducer::GalleryAction,
};

pub use crate::runtime_context::{use_gallery_runtime, GalleryProvider, GalleryRuntimeContext};

#[component]
/// The full memories page, wrapped in its own [`GalleryProvider`].
pub fn MemoriesPage(
    /// Entry to open in the media modal, reopened whenever the value changes.
    #[prop(optional, into)]
    open_entry: MaybeSignal<Option<EntryId>>,
) -> impl IntoView {
    view! {
        <GalleryProvider>
            <MemoriesShell open_entry=open_entry />
        </GalleryProvider>
    }
}

#[component]
fn MemoriesShell(open_entry: MaybeSignal<Option<EntryId>>) -> impl IntoView {
    let runtime = use_gallery_runtime();

    let keyboard_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let action = runtime
            .state
            .with_untracked(|state| action_for_key(state, &ev.key()));
        if let Some(action) = action {
            ev.prevent_default();
            runtime.dispatch_action(action);
        }
    });
    on_cleanup(move || keyboard_listener.remove());

    let scroll_throttle = store_value(ScrollThrottle::default());
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        if !scroll_throttle.try_update_value(ScrollThrottle::on_event).unwrap_or(false) {
            return;
        }
        dispatch_scroll_measurement(runtime);
        set_timeout(
            move || {
                let trailing = scroll_throttle
                    .try_update_value(ScrollThrottle::on_cooldown_elapsed)
                    .unwrap_or(false);
                if trailing {
                    dispatch_scroll_measurement(runtime);
                }
            },
            Duration::from_millis(SCROLL_THROTTLE_MS),
        );
    });
    on_cleanup(move || scroll_listener.remove());

    create_effect(move |_| {
        if let Some(entry_id) = open_entry.get() {
            runtime.dispatch_action(GalleryAction::OpenEntry { entry_id });
        }
    });

    view! {
        <div class="memories-page">
            <NavigationBar />
            <main>
                <HeroSection />
                <StorySection />
                <GallerySection />
                <MessageSection />
            </main>
            <MediaModal />
            <UploadDialogView />
            <NotificationStack />
        </div>
    }
}

fn dispatch_scroll_measurement(runtime: GalleryRuntimeContext) {
    let host = runtime.host.get_value();
    runtime.dispatch_action(GalleryAction::ScrollChanged {
        scroll_y: host.scroll_y(),
        sections: host.section_bounds(),
    });
}
