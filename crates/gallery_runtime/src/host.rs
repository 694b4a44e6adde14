//! Host-side runtime helpers for executing reducer effects and querying browser page state.
//!
//! Reducer semantics stay pure; every timer, object URL, and DOM mutation the gallery needs goes
//! through [`GalleryHostContext`].

mod effects;
mod host_ui;
mod object_urls;
mod timers;

use platform_host::{LocalFile, ObjectUrlService};
use platform_host_web::{host_strategy_name, object_url_service, ObjectUrlServiceAdapter};

use crate::{
    model::MediaRef, navigation::SectionBounds, reducer::RuntimeEffect,
    runtime_context::GalleryRuntimeContext,
};

pub use object_urls::apply_object_url_effect;

/// DOM id of the `<video>` element rendered inside the media modal.
pub const MODAL_VIDEO_DOM_ID: &str = "modal-media-video";

#[derive(Debug, Clone)]
/// Host service bundle for gallery runtime side effects.
pub struct GalleryHostContext {
    object_urls: ObjectUrlServiceAdapter,
    host_strategy_name: &'static str,
}

impl Default for GalleryHostContext {
    fn default() -> Self {
        Self {
            object_urls: object_url_service(),
            host_strategy_name: host_strategy_name(),
        }
    }
}

impl GalleryHostContext {
    /// Returns the configured object-URL service.
    pub fn object_url_service(&self) -> &ObjectUrlServiceAdapter {
        &self.object_urls
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Resolves an entry's media reference to a renderable URL.
    pub fn media_url(&self, media: &MediaRef) -> Option<String> {
        media_url(&self.object_urls, media)
    }

    /// Registers the files of a picker or drop event with the host.
    pub fn register_file_list(&self, files: &web_sys::FileList) -> Vec<LocalFile> {
        self.object_urls.register_file_list(files)
    }

    /// Measures the page sections used for active-link tracking.
    pub fn section_bounds(&self) -> Vec<SectionBounds> {
        host_ui::section_bounds()
    }

    /// Current vertical scroll offset of the page.
    pub fn scroll_y(&self) -> f64 {
        host_ui::scroll_y()
    }

    /// Executes an effect that [`RuntimeEffect::runs_before_render`], while the DOM still shows
    /// the state the effect was computed from.
    pub fn run_pre_render_effect(&self, effect: &RuntimeEffect) {
        effects::run_pre_render_effect(effect);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: GalleryRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }
}

/// Resolves a media reference against an object-URL service.
///
/// Static assets resolve to their path; session files to a session-lifetime object URL.
pub fn media_url(service: &impl ObjectUrlService, media: &MediaRef) -> Option<String> {
    match media {
        MediaRef::Static { path } => Some(path.clone()),
        MediaRef::Session { blob } => service.session_url(*blob),
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{BlobKey, MemoryObjectUrlService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn media_url_resolves_static_and_session_media() {
        let service = MemoryObjectUrlService::default();
        service.register(BlobKey(4));

        assert_eq!(
            media_url(
                &service,
                &MediaRef::Static {
                    path: "/assets/beach.jpg".to_string()
                }
            ),
            Some("/assets/beach.jpg".to_string())
        );
        let session = media_url(&service, &MediaRef::Session { blob: BlobKey(4) });
        assert!(session.is_some());
        assert_eq!(
            media_url(&service, &MediaRef::Session { blob: BlobKey(4) }),
            session
        );
        assert_eq!(
            media_url(&service, &MediaRef::Session { blob: BlobKey(5) }),
            None
        );
    }
}
