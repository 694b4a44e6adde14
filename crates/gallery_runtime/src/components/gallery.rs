use leptos::*;
use platform_host::{unix_time_ms_now, MediaKind};

use crate::{
    counter::utc_date,
    filter::{EntryVisibility, ALL_CATEGORIES},
    model::{CategoryOption, GalleryEntry},
    reducer::GalleryAction,
    runtime_context::use_gallery_runtime,
};

fn visibility_class(visibility: EntryVisibility) -> &'static str {
    match visibility {
        EntryVisibility::Visible | EntryVisibility::Entering => "gallery-item filtered-in",
        EntryVisibility::Leaving | EntryVisibility::Hidden => "gallery-item filtered-out",
    }
}

#[component]
pub(super) fn GallerySection() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let state = runtime.state;
    let active = create_memo(move |_| state.with(|state| state.filter.active().as_str().to_string()));
    let entries = create_memo(move |_| state.with(|state| state.catalog.all().to_vec()));
    let loading = create_memo(move |_| state.with(|state| state.loading_more));

    let mut filters = vec![CategoryOption {
        id: ALL_CATEGORIES.to_string(),
        label: "All".to_string(),
    }];
    filters.extend(state.with_untracked(|state| state.settings.categories.clone()));

    view! {
        <section id="gallery" class="gallery">
            <h2 class="section-title">"Gallery"</h2>
            <div class="gallery-filters" role="group" aria-label="Filter memories">
                {filters
                    .into_iter()
                    .map(|option| {
                        let id = option.id;
                        let class_id = id.clone();
                        let click_id = id.clone();
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if active.get() == class_id { "filter-btn active" } else { "filter-btn" }
                                }
                                data-filter=id
                                on:click=move |_| {
                                    runtime
                                        .dispatch_action(GalleryAction::SetFilter {
                                            tag: click_id.clone(),
                                        })
                                }
                            >
                                {option.label}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    type="button"
                    class="upload-btn"
                    on:click=move |_| {
                        runtime
                            .dispatch_action(GalleryAction::OpenUploadDialog {
                                today: utc_date(unix_time_ms_now()),
                            })
                    }
                >
                    "Add memory"
                </button>
            </div>
            <div class="gallery-grid">
                <For each=move || entries.get() key=|entry| entry.id let:entry>
                    <GalleryItem entry=entry />
                </For>
            </div>
            <div class="load-more">
                <button
                    type="button"
                    class="load-more-btn"
                    disabled=move || loading.get()
                    on:click=move |_| runtime.dispatch_action(GalleryAction::LoadMore)
                >
                    {move || if loading.get() { "Loading..." } else { "Load more memories" }}
                </button>
            </div>
        </section>
    }
}

#[component]
fn GalleryItem(entry: GalleryEntry) -> impl IntoView {
    let runtime = use_gallery_runtime();
    let entry_id = entry.id;
    let visibility = create_memo(move |_| {
        runtime
            .state
            .with(|state| state.filter.visibility(entry_id))
    });
    let src = runtime
        .host
        .with_value(|host| host.media_url(&entry.media))
        .unwrap_or_default();

    let tags = runtime.state.with_untracked(|state| {
        entry
            .categories
            .iter()
            .map(|tag| state.settings.category_label(tag).to_string())
            .collect::<Vec<_>>()
    });

    let media = match entry.kind {
        MediaKind::Image => view! {
            <img src=src alt=entry.title.clone() loading="lazy" />
        }
        .into_view(),
        MediaKind::Video => view! { <GridVideo src=src /> }.into_view(),
    };

    view! {
        <div
            class=move || visibility_class(visibility.get())
            style=move || if visibility.get().is_displayed() { "" } else { "display:none;" }
            data-category=entry.category_attr()
            data-kind=entry.kind.as_str()
        >
            <div class="media-container">
                {media}
                <div class="media-overlay">
                    <button
                        type="button"
                        class="action-btn"
                        aria-label="View memory"
                        on:click=move |_| runtime.dispatch_action(GalleryAction::OpenEntry { entry_id })
                    >
                        <i class="fas fa-expand" aria-hidden="true"></i>
                    </button>
                    <button
                        type="button"
                        class="action-btn"
                        aria-label="Download memory"
                        on:click=move |_| {
                            runtime
                                .dispatch_action(GalleryAction::DownloadEntry {
                                    entry_id,
                                    now_unix_ms: unix_time_ms_now(),
                                })
                        }
                    >
                        <i class="fas fa-download" aria-hidden="true"></i>
                    </button>
                </div>
            </div>
            <div class="media-info">
                <h4>{entry.title.clone()}</h4>
                <p>{entry.description.clone()}</p>
                <span class="media-date">{entry.display_date()}</span>
                <div class="media-tags">
                    {tags
                        .into_iter()
                        .map(|label| view! { <span class="media-tag">{label}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

fn play_button_style(playing: bool) -> &'static str {
    if playing {
        "display:none;"
    } else {
        ""
    }
}

/// Inline grid video with a play button that hides while the clip plays.
#[component]
fn GridVideo(src: String) -> impl IntoView {
    let video = create_node_ref::<html::Video>();
    let playing = create_rw_signal(false);

    view! {
        <div class="video-container">
            <video
                src=src
                preload="metadata"
                muted=true
                playsinline=true
                node_ref=video
                on:play=move |_| playing.set(true)
                on:pause=move |_| playing.set(false)
                on:ended=move |_| playing.set(false)
            ></video>
            <button
                type="button"
                class="video-play-btn"
                aria-label="Play video"
                style=move || play_button_style(playing.get())
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    let Some(video) = video.get_untracked() else {
                        return;
                    };
                    if let Err(err) = video.play() {
                        logging::warn!("grid video failed to start: {err:?}");
                    }
                }
            >
                <i class="fas fa-play" aria-hidden="true"></i>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn entering_and_leaving_entries_carry_their_target_class() {
        assert_eq!(
            visibility_class(EntryVisibility::Entering),
            "gallery-item filtered-in"
        );
        assert_eq!(
            visibility_class(EntryVisibility::Leaving),
            "gallery-item filtered-out"
        );
    }

    #[test]
    fn play_button_hides_only_while_playing() {
        assert_eq!(play_button_style(false), "");
        assert_eq!(play_button_style(true), "display:none;");
    }
}
