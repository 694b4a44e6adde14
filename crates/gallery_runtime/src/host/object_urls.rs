//! Preview and blob lifecycle effects.

use leptos::logging;
use platform_host::ObjectUrlService;

use crate::reducer::{GalleryAction, RuntimeEffect};

/// Executes the object-URL part of a [`RuntimeEffect`].
///
/// Returns the follow-up action to dispatch, if any. Effects that do not touch object URLs are
/// ignored.
pub fn apply_object_url_effect(
    service: &impl ObjectUrlService,
    effect: &RuntimeEffect,
) -> Option<GalleryAction> {
    match effect {
        RuntimeEffect::CreatePreview { staged_id, blob } => {
            match service.create_preview(*blob) {
                Ok(handle) => Some(GalleryAction::PreviewCreated {
                    staged_id: *staged_id,
                    handle,
                }),
                Err(err) => {
                    logging::warn!("preview creation failed for blob {}: {err}", blob.0);
                    None
                }
            }
        }
        RuntimeEffect::RevokePreview(handle) => {
            if let Err(err) = service.revoke_preview(handle.clone()) {
                logging::warn!("preview revoke failed: {err}");
            }
            None
        }
        RuntimeEffect::ForgetFile(blob) => {
            service.forget(*blob);
            None
        }
        _ => None,
    }
}
