//! Upload dialog: drop zone, staged-file previews, and the memory form.

use leptos::*;
use platform_host::{unix_time_ms_now, LocalFile, MediaKind};

use crate::{
    counter::utc_date,
    reducer::GalleryAction,
    runtime_context::{use_gallery_runtime, GalleryRuntimeContext},
    staging::{StagedFileId, UploadFormField, UploadStagingBuffer},
};

/// One row of the preview strip. The preview URL is read separately so a row keeps its identity
/// when the host answers with the URL.
#[derive(Debug, Clone, PartialEq)]
struct StagedPreview {
    id: StagedFileId,
    name: String,
    kind: MediaKind,
}

#[derive(Debug, Clone, PartialEq)]
enum PreviewMedia {
    Pending,
    Image(String),
    Video(String),
}

fn staged_previews(staging: &UploadStagingBuffer) -> Vec<StagedPreview> {
    staging
        .files()
        .iter()
        .map(|staged| StagedPreview {
            id: staged.id,
            name: staged.file.name.clone(),
            kind: staged.kind,
        })
        .collect()
}

fn preview_media(staging: &UploadStagingBuffer, id: StagedFileId, kind: MediaKind) -> PreviewMedia {
    match (kind, staging.preview_url(id)) {
        (_, None) => PreviewMedia::Pending,
        (MediaKind::Image, Some(url)) => PreviewMedia::Image(url.to_string()),
        (MediaKind::Video, Some(url)) => PreviewMedia::Video(url.to_string()),
    }
}

fn stage_files(runtime: GalleryRuntimeContext, files: Option<web_sys::FileList>) {
    let Some(files) = files else {
        return;
    };
    let files: Vec<LocalFile> = runtime
        .host
        .with_value(|host| host.register_file_list(&files));
    if !files.is_empty() {
        runtime.dispatch_action(GalleryAction::AddFiles { files });
    }
}

#[component]
pub(super) fn UploadDialogView() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let state = runtime.state;
    let is_open = create_memo(move |_| state.with(|state| state.upload.open));
    let form = create_memo(move |_| state.with(|state| state.upload.form.clone()));
    let previews = create_memo(move |_| state.with(|state| staged_previews(&state.staging)));
    let categories = state.with_untracked(|state| state.settings.categories.clone());
    let drag_active = create_rw_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let edit = move |field: UploadFormField| runtime.dispatch_action(GalleryAction::EditUploadForm(field));

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <div id="upload-modal" class="upload-modal" role="dialog" aria-modal="true">
                <div class="upload-modal-content">
                    <button
                        type="button"
                        class="close-modal"
                        aria-label="Close"
                        on:click=move |_| runtime.dispatch_action(GalleryAction::CloseUploadDialog)
                    >
                        "×"
                    </button>
                    <h3>"Add a new memory"</h3>
                    <div
                        id="upload-zone"
                        class=move || if drag_active.get() { "upload-zone drag-over" } else { "upload-zone" }
                        on:click=move |_| {
                            if let Some(input) = file_input.get_untracked() {
                                input.click();
                            }
                        }
                        on:dragover=move |ev: ev::DragEvent| {
                            ev.prevent_default();
                            drag_active.set(true);
                        }
                        on:dragleave=move |ev: ev::DragEvent| {
                            ev.prevent_default();
                            drag_active.set(false);
                        }
                        on:drop=move |ev: ev::DragEvent| {
                            ev.prevent_default();
                            drag_active.set(false);
                            stage_files(runtime, ev.data_transfer().and_then(|transfer| transfer.files()));
                        }
                    >
                        <i class="fas fa-cloud-upload-alt" aria-hidden="true"></i>
                        <p>"Drop photos or videos here, or click to browse"</p>
                        <input
                            id="file-input"
                            type="file"
                            accept="image/*,video/*"
                            multiple=true
                            hidden=true
                            node_ref=file_input
                            on:change=move |ev| {
                                let input = event_target::<web_sys::HtmlInputElement>(&ev);
                                stage_files(runtime, input.files());
                                input.set_value("");
                            }
                        />
                    </div>
                    <div id="upload-preview" class="upload-preview">
                        <For each=move || previews.get() key=|preview| preview.id let:preview>
                            <PreviewItem preview=preview />
                        </For>
                    </div>
                    <form
                        class="upload-form"
                        on:submit=move |ev: ev::SubmitEvent| {
                            ev.prevent_default();
                            runtime
                                .dispatch_action(GalleryAction::SaveMemory {
                                    today: utc_date(unix_time_ms_now()),
                                });
                        }
                    >
                        <input
                            id="memory-title"
                            type="text"
                            placeholder="Title"
                            prop:value=move || form.get().title
                            on:input=move |ev| edit(UploadFormField::Title(event_target_value(&ev)))
                        />
                        <textarea
                            id="memory-description"
                            placeholder="Description"
                            prop:value=move || form.get().description
                            on:input=move |ev| edit(UploadFormField::Description(event_target_value(&ev)))
                        ></textarea>
                        <select
                            id="memory-category"
                            prop:value=move || form.get().category
                            on:change=move |ev| edit(UploadFormField::Category(event_target_value(&ev)))
                        >
                            {categories
                                .iter()
                                .map(|option| {
                                    view! { <option value=option.id.clone()>{option.label.clone()}</option> }
                                })
                                .collect_view()}
                        </select>
                        <input
                            id="memory-date"
                            type="date"
                            prop:value=move || form.get().date
                            on:input=move |ev| edit(UploadFormField::Date(event_target_value(&ev)))
                        />
                        <div class="upload-actions">
                            <button
                                type="button"
                                class="cancel-btn"
                                on:click=move |_| runtime.dispatch_action(GalleryAction::CloseUploadDialog)
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="save-btn">
                                "Save memory"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn PreviewItem(preview: StagedPreview) -> impl IntoView {
    let runtime = use_gallery_runtime();
    let StagedPreview { id, name, kind } = preview;
    let media = create_memo(move |_| {
        runtime
            .state
            .with(|state| preview_media(&state.staging, id, kind))
    });
    let alt = name.clone();
    let label = name.clone();

    view! {
        <div class="preview-item">
            {move || match media.get() {
                PreviewMedia::Image(url) => view! { <img src=url alt=alt.clone() /> }.into_view(),
                PreviewMedia::Video(url) => view! { <video src=url muted=true></video> }.into_view(),
                PreviewMedia::Pending => {
                    view! { <span class="preview-name">{label.clone()}</span> }.into_view()
                }
            }}
            <button
                type="button"
                class="remove-preview"
                aria-label=format!("Remove {name}")
                on:click=move |_| {
                    runtime.dispatch_action(GalleryAction::RemoveStagedFile { staged_id: id })
                }
            >
                "×"
            </button>
        </div>
    }
}
