use leptos::*;
use wasm_bindgen::JsCast;

use crate::{
    navigation::{click_closes_menu, PAGE_SECTIONS},
    reducer::GalleryAction,
    runtime_context::use_gallery_runtime,
};

#[component]
pub(super) fn NavigationBar() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let nav = create_memo(move |_| runtime.state.with(|state| state.nav.clone()));
    let page_title = runtime
        .state
        .with_untracked(|state| state.settings.page_title.clone());
    let navbar = create_node_ref::<html::Nav>();

    let outside_click_listener = window_event_listener(ev::click, move |ev| {
        let menu_open = runtime.state.with_untracked(|state| state.nav.menu_open);
        let inside_navbar = match (navbar.get_untracked(), ev.target()) {
            (Some(navbar), Some(target)) => target
                .dyn_ref::<web_sys::Node>()
                .is_some_and(|node| navbar.contains(Some(node))),
            _ => false,
        };
        if click_closes_menu(menu_open, inside_navbar) {
            runtime.dispatch_action(GalleryAction::CloseNavMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    view! {
        <nav
            id="navbar"
            node_ref=navbar
            class=move || if nav.get().scrolled { "navbar scrolled" } else { "navbar" }
        >
            <div class="nav-container">
                <span class="nav-logo">{page_title}</span>
                <ul
                    id="nav-menu"
                    class=move || if nav.get().menu_open { "nav-menu active" } else { "nav-menu" }
                >
                    {PAGE_SECTIONS
                        .iter()
                        .map(|&(section, label)| {
                            view! {
                                <li class="nav-item">
                                    <a
                                        href=format!("#{section}")
                                        class=move || {
                                            if nav.get().active_section == section {
                                                "nav-link active"
                                            } else {
                                                "nav-link"
                                            }
                                        }
                                        on:click=move |ev: ev::MouseEvent| {
                                            ev.prevent_default();
                                            runtime
                                                .dispatch_action(GalleryAction::NavigateTo {
                                                    section: section.to_string(),
                                                });
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    id="hamburger"
                    type="button"
                    class=move || if nav.get().menu_open { "hamburger active" } else { "hamburger" }
                    aria-label="Toggle navigation"
                    aria-controls="nav-menu"
                    aria-expanded=move || nav.get().menu_open.to_string()
                    on:click=move |_| runtime.dispatch_action(GalleryAction::ToggleNavMenu)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
