use leptos::*;

use crate::{reducer::GalleryAction, runtime_context::use_gallery_runtime};

#[component]
pub(super) fn NotificationStack() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let items = create_memo(move |_| {
        runtime
            .state
            .with(|state| state.notifications.items().to_vec())
    });

    view! {
        <div class="notification-stack" role="status" aria-live="polite">
            <For each=move || items.get() key=|item| item.id let:item>
                <div class=format!("notification {}", item.kind.css_class())>
                    <i class=format!("fas fa-{}", item.kind.icon()) aria-hidden="true"></i>
                    <span>{item.message.clone()}</span>
                    <button
                        type="button"
                        aria-label="Dismiss notification"
                        on:click=move |_| {
                            runtime.dispatch_action(GalleryAction::DismissNotification { id: item.id })
                        }
                    >
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}
