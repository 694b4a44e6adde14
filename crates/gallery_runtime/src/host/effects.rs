//! Runtime-effect dispatch for the gallery host boundary.

use leptos::logging;

use crate::{
    host::{host_ui, object_urls, timers, GalleryHostContext},
    reducer::RuntimeEffect,
    runtime_context::GalleryRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: GalleryHostContext,
    runtime: GalleryRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::ScheduleTimer { task, delay_ms } => {
            timers::arm(runtime.dispatch, task, delay_ms)
        }
        RuntimeEffect::CreatePreview { .. }
        | RuntimeEffect::RevokePreview(_)
        | RuntimeEffect::ForgetFile(_) => {
            if let Some(action) =
                object_urls::apply_object_url_effect(host.object_url_service(), &effect)
            {
                runtime.dispatch_action(action);
            }
        }
        RuntimeEffect::PauseModalVideo => host_ui::pause_modal_video(),
        RuntimeEffect::SetBodyScrollLocked(locked) => host_ui::set_body_scroll_locked(locked),
        RuntimeEffect::DownloadMedia { media, file_name } => match host.media_url(&media) {
            Some(url) => host_ui::download(&url, &file_name),
            None => logging::warn!("download skipped: no url for `{file_name}`"),
        },
        RuntimeEffect::ScrollToSection(section) => host_ui::scroll_to_section(&section),
    }
}

pub(super) fn run_pre_render_effect(effect: &RuntimeEffect) {
    match effect {
        RuntimeEffect::PauseModalVideo => host_ui::pause_modal_video(),
        other => logging::warn!("effect cannot run before render: {other:?}"),
    }
}
