use leptos::*;
use platform_host::{unix_time_ms_now, MediaKind};

use crate::{
    host::MODAL_VIDEO_DOM_ID, model::GalleryEntry, reducer::GalleryAction,
    runtime_context::use_gallery_runtime,
};

#[derive(Debug, Clone, PartialEq)]
struct ModalSnapshot {
    entry: GalleryEntry,
    previous_enabled: bool,
    next_enabled: bool,
}

#[component]
pub(super) fn MediaModal() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let snapshot = create_memo(move |_| {
        runtime.state.with(|state| {
            state.modal.view(&state.catalog).map(|view| ModalSnapshot {
                entry: view.entry.clone(),
                previous_enabled: view.previous_enabled,
                next_enabled: view.next_enabled,
            })
        })
    });

    view! {
        {move || {
                snapshot
                    .get()
                    .map(|snapshot| {
                        let entry_id = snapshot.entry.id;
                        let src = runtime
                            .host
                            .with_value(|host| host.media_url(&snapshot.entry.media))
                            .unwrap_or_default();
                        let media = match snapshot.entry.kind {
                            MediaKind::Image => view! {
                                <img id="modal-media-img" src=src alt=snapshot.entry.title.clone() />
                            }
                            .into_view(),
                            MediaKind::Video => view! {
                                <video id=MODAL_VIDEO_DOM_ID src=src controls=true autoplay=true></video>
                            }
                            .into_view(),
                        };
                        view! {
                            <div
                                id="media-modal"
                                class="media-modal"
                                role="dialog"
                                aria-modal="true"
                                on:click=move |_| runtime.dispatch_action(GalleryAction::CloseModal)
                            >
                                <div
                                    class="media-modal-content"
                                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                                >
                                    <button
                                        type="button"
                                        class="close-modal"
                                        aria-label="Close"
                                        on:click=move |_| runtime.dispatch_action(GalleryAction::CloseModal)
                                    >
                                        "×"
                                    </button>
                                    <button
                                        type="button"
                                        class="nav-btn prev-btn"
                                        aria-label="Previous memory"
                                        disabled=!snapshot.previous_enabled
                                        on:click=move |_| runtime.dispatch_action(GalleryAction::PreviousEntry)
                                    >
                                        <i class="fas fa-chevron-left" aria-hidden="true"></i>
                                    </button>
                                    <div class="modal-media">{media}</div>
                                    <button
                                        type="button"
                                        class="nav-btn next-btn"
                                        aria-label="Next memory"
                                        disabled=!snapshot.next_enabled
                                        on:click=move |_| runtime.dispatch_action(GalleryAction::NextEntry)
                                    >
                                        <i class="fas fa-chevron-right" aria-hidden="true"></i>
                                    </button>
                                    <div class="modal-info">
                                        <h3 id="modal-media-title">{snapshot.entry.title.clone()}</h3>
                                        <p id="modal-media-description">
                                            {snapshot.entry.description.clone()}
                                        </p>
                                        <span id="modal-media-date">{snapshot.entry.display_date()}</span>
                                        <button
                                            type="button"
                                            class="download-btn"
                                            on:click=move |_| {
                                                runtime
                                                    .dispatch_action(GalleryAction::DownloadEntry {
                                                        entry_id,
                                                        now_unix_ms: unix_time_ms_now(),
                                                    })
                                            }
                                        >
                                            "Download"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
        }}
    }
}
