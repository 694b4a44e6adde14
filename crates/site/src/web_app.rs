use gallery_runtime::{gallery_manifest, EntryId, MemoriesPage};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let page_title = gallery_manifest().page_title.clone();

    view! {
        <Title text=page_title />
        <Meta name="description" content="A gallery of shared photos and videos." />

        <Router>
            <Routes>
                <Route path="" view=GalleryEntry />
                <Route path="/memory/:id" view=MemoryRoute />
            </Routes>
        </Router>
    }
}

#[component]
fn GalleryEntry() -> impl IntoView {
    view! { <MemoriesPage /> }
}

/// Deep link that boots the gallery with one memory open in the modal.
#[component]
pub fn MemoryRoute() -> impl IntoView {
    let params = use_params_map();
    let open_entry = Signal::derive(move || params.with(memory_id_param));

    view! { <MemoriesPage open_entry=open_entry /> }
}

fn memory_id_param(params: &ParamsMap) -> Option<EntryId> {
    params.get("id").and_then(|id| parse_memory_id(id))
}

fn parse_memory_id(raw: &str) -> Option<EntryId> {
    raw.trim().parse().ok().map(EntryId)
}
