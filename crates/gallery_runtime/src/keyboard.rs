//! Global keyboard shortcuts for the gallery dialogs.

use crate::{model::GalleryState, reducer::GalleryAction};

/// Maps a `KeyboardEvent.key` value to an action for the current state.
///
/// The media modal takes precedence over the upload dialog. Returns `None` when the key should
/// fall through to the browser.
pub fn action_for_key(state: &GalleryState, key: &str) -> Option<GalleryAction> {
    if state.modal.is_open() {
        return match key {
            "ArrowLeft" => Some(GalleryAction::PreviousEntry),
            "ArrowRight" => Some(GalleryAction::NextEntry),
            "Escape" => Some(GalleryAction::CloseModal),
            _ => None,
        };
    }
    if state.upload.open && key == "Escape" {
        return Some(GalleryAction::CloseUploadDialog);
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{catalog::sample_entry, modal::ModalState};

    #[test]
    fn arrows_navigate_only_while_modal_is_open() {
        let mut state = GalleryState::default();
        let id = state.catalog.append(sample_entry("One", &["photos"]));
        assert_eq!(action_for_key(&state, "ArrowRight"), None);

        state.modal.open(&state.catalog, id);
        assert_eq!(action_for_key(&state, "ArrowRight"), Some(GalleryAction::NextEntry));
        assert_eq!(action_for_key(&state, "ArrowLeft"), Some(GalleryAction::PreviousEntry));
        assert_eq!(action_for_key(&state, "Escape"), Some(GalleryAction::CloseModal));
        assert_eq!(action_for_key(&state, "Enter"), None);
    }

    #[test]
    fn escape_closes_upload_dialog() {
        let mut state = GalleryState::default();
        state.modal = ModalState::Closed;
        state.upload.open = true;
        assert_eq!(
            action_for_key(&state, "Escape"),
            Some(GalleryAction::CloseUploadDialog)
        );
        assert_eq!(action_for_key(&state, "ArrowLeft"), None);
    }
}
