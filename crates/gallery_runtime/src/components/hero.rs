use std::time::Duration;

use leptos::*;
use platform_host::unix_time_ms_now;

use crate::{counter::CounterReading, reducer::GalleryAction, runtime_context::use_gallery_runtime};

#[component]
pub(super) fn HeroSection() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let page_title = runtime
        .state
        .with_untracked(|state| state.settings.page_title.clone());

    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">{page_title}</h1>
                <TogetherCounter />
                <button
                    type="button"
                    class="cta-button"
                    on:click=move |_| {
                        runtime
                            .dispatch_action(GalleryAction::NavigateTo {
                                section: "gallery".to_string(),
                            })
                    }
                >
                    "Explore our memories"
                </button>
            </div>
        </section>
    }
}

#[component]
fn TogetherCounter() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let since = runtime
        .state
        .with_untracked(|state| state.settings.together_since);
    let reading = create_rw_signal(CounterReading::since(since, unix_time_ms_now()));

    if let Ok(interval) = set_interval_with_handle(
        move || reading.set(CounterReading::since(since, unix_time_ms_now())),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <p class="together-counter">
            <span id="love-counter" class="counter-value">
                {move || reading.get().display_value()}
            </span>
            " "
            <span class="counter-unit">{move || reading.get().unit.label()}</span>
            " together"
        </p>
    }
}

#[component]
pub(super) fn StorySection() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let (since, first_title) = runtime.state.with_untracked(|state| {
        (
            state.settings.together_since.format("%B %-d, %Y").to_string(),
            state.catalog.get(0).map(|entry| entry.title.clone()),
        )
    });

    view! {
        <section id="story" class="story">
            <h2 class="section-title">"Our Story"</h2>
            <p class="story-intro">{format!("It all started on {since}.")}</p>
            {first_title
                .map(|title| view! { <p class="story-first-memory">{format!("First memory: {title}")}</p> })}
        </section>
    }
}

#[component]
pub(super) fn MessageSection() -> impl IntoView {
    view! {
        <section id="message" class="message">
            <div class="final-message">
                <h2 class="section-title">"To Many More"</h2>
                <p>"Every moment with you is a memory worth keeping."</p>
            </div>
        </section>
    }
}
