#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
use crate::host::MODAL_VIDEO_DOM_ID;
use crate::navigation::SectionBounds;
#[cfg(target_arch = "wasm32")]
use crate::navigation::{scroll_target, PAGE_SECTIONS};

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub(super) fn pause_modal_video() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(MODAL_VIDEO_DOM_ID) else {
            return;
        };
        if let Ok(video) = element.dyn_into::<web_sys::HtmlMediaElement>() {
            let _ = video.pause();
        }
    }
}

pub(super) fn set_body_scroll_locked(locked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = document().and_then(|document| document.body()) else {
            return;
        };
        let overflow = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", overflow);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = locked;
}

pub(super) fn download(url: &str, file_name: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = document() else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let Ok(anchor) = document
            .create_element("a")
            .and_then(|element| element.dyn_into::<web_sys::HtmlAnchorElement>().map_err(Into::into))
        else {
            return;
        };
        anchor.set_href(url);
        anchor.set_download(file_name);
        if body.append_child(&anchor).is_ok() {
            anchor.click();
            anchor.remove();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (url, file_name);
}

pub(super) fn scroll_to_section(section: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = document().and_then(|document| document.get_element_by_id(section))
        else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_target(f64::from(element.offset_top())));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = section;
}

pub(super) fn section_bounds() -> Vec<SectionBounds> {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = document() else {
            return Vec::new();
        };
        PAGE_SECTIONS
            .iter()
            .filter_map(|(id, _)| {
                let element = document
                    .get_element_by_id(id)?
                    .dyn_into::<web_sys::HtmlElement>()
                    .ok()?;
                Some(SectionBounds {
                    id: (*id).to_string(),
                    top: f64::from(element.offset_top()),
                    height: f64::from(element.offset_height()),
                })
            })
            .collect()
    }
    #[cfg(not(target_arch = "wasm32"))]
    Vec::new()
}

pub(super) fn scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.scroll_y().unwrap_or(0.0);
        }
    }
    0.0
}
