//! Reducer actions, side-effect intents, and transition logic for the gallery page.

use chrono::NaiveDate;
use leptos::logging;
use platform_host::{BlobKey, LocalFile, MediaKind, PreviewHandle};
use thiserror::Error;

use crate::{
    filter::{CategoryFilter, FilterTransition},
    model::{EntryId, GalleryEntry, GalleryState, MediaRef},
    navigation::SectionBounds,
    notifications::{NotificationId, NotificationKind},
    scheduler::{TaskId, TimerTask},
    staging::{StagedFileId, UploadFormField, ValidationError},
};

pub const MEMORY_SAVED_MESSAGE: &str = "Memory saved successfully! 💕";
pub const ALL_LOADED_MESSAGE: &str = "All memories loaded! 💕";

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_gallery`] to mutate [`GalleryState`].
pub enum GalleryAction {
    /// Make a category (or `"all"`) the sole active filter.
    SetFilter {
        /// Category id, or `"all"`.
        tag: String,
    },
    /// Open the media modal on an entry.
    OpenEntry {
        /// Entry to show.
        entry_id: EntryId,
    },
    /// Show the next catalog entry in the modal.
    NextEntry,
    /// Show the previous catalog entry in the modal.
    PreviousEntry,
    /// Close the media modal.
    CloseModal,
    /// Stage files picked or dropped by the user.
    AddFiles {
        /// Descriptors registered with the host.
        files: Vec<LocalFile>,
    },
    /// The host created a preview for a staged file.
    PreviewCreated {
        /// Staged file the preview belongs to.
        staged_id: StagedFileId,
        /// Handle that now has to be revoked exactly once.
        handle: PreviewHandle,
    },
    /// Drop one staged file.
    RemoveStagedFile {
        /// Staged file to drop.
        staged_id: StagedFileId,
    },
    /// Show the upload dialog with today's date preselected.
    OpenUploadDialog {
        /// Local calendar date.
        today: NaiveDate,
    },
    /// Edit one upload form field.
    EditUploadForm(UploadFormField),
    /// Commit staged files as new gallery entries.
    SaveMemory {
        /// Fallback date when the form leaves it blank.
        today: NaiveDate,
    },
    /// Cancel the upload dialog, discarding the form and staged files.
    CloseUploadDialog,
    /// Save an entry's media to disk.
    DownloadEntry {
        /// Entry to download.
        entry_id: EntryId,
        /// Current unix time, used for video file names.
        now_unix_ms: u64,
    },
    /// Ask for more memories.
    LoadMore,
    /// Show a toast.
    ShowNotification {
        /// Visual style.
        kind: NotificationKind,
        /// Message text.
        message: String,
    },
    /// Remove a toast.
    DismissNotification {
        /// Toast to remove.
        id: NotificationId,
    },
    /// A timer armed for [`RuntimeEffect::ScheduleTimer`] elapsed.
    TimerElapsed {
        /// Task the timer was armed for.
        task: TaskId,
    },
    /// Toggle the mobile navigation menu.
    ToggleNavMenu,
    /// Close the mobile navigation menu.
    CloseNavMenu,
    /// Scroll to a page section.
    NavigateTo {
        /// Section DOM id.
        section: String,
    },
    /// The page scrolled.
    ScrollChanged {
        /// Current vertical scroll offset.
        scroll_y: f64,
        /// Layout of the page sections.
        sections: Vec<SectionBounds>,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_gallery`] for the host to execute.
pub enum RuntimeEffect {
    /// Arm a timer and dispatch [`GalleryAction::TimerElapsed`] after `delay_ms`.
    ScheduleTimer {
        /// Task to report back.
        task: TaskId,
        /// Delay in milliseconds.
        delay_ms: u32,
    },
    /// Create a preview URL and dispatch [`GalleryAction::PreviewCreated`].
    CreatePreview {
        /// Staged file waiting for the preview.
        staged_id: StagedFileId,
        /// Host blob to preview.
        blob: BlobKey,
    },
    /// Revoke a preview URL released by the staging ledger.
    RevokePreview(PreviewHandle),
    /// Release a host blob that will never be committed.
    ForgetFile(BlobKey),
    /// Pause the modal's video element. Runs before the state change renders.
    PauseModalVideo,
    /// Lock or unlock page scrolling behind an overlay.
    SetBodyScrollLocked(bool),
    /// Trigger a browser download.
    DownloadMedia {
        /// Media to download.
        media: MediaRef,
        /// Suggested file name.
        file_name: String,
    },
    /// Smooth-scroll to a section.
    ScrollToSection(String),
}

impl RuntimeEffect {
    /// Whether the effect must touch the DOM before the new state is rendered.
    pub fn runs_before_render(&self) -> bool {
        matches!(self, Self::PauseModalVideo)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The form or staging buffer is not ready to save.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The target entry id is not in the catalog.
    #[error("gallery entry not found")]
    EntryNotFound,
    /// The target staged file is not in the staging buffer.
    #[error("staged file not found")]
    StagedFileNotFound,
}

impl ReducerError {
    /// Whether the error should be shown to the user rather than only logged.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Applies a [`GalleryAction`] to the page state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references a missing entry or staged file, or when
/// saving fails validation. Callers should discard `state` on error; no partial change is
/// meaningful.
pub fn reduce_gallery(
    state: &mut GalleryState,
    action: GalleryAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        GalleryAction::SetFilter { tag } => {
            for task in state.filter.take_pending_tasks() {
                state.timers.cancel(task);
            }
            let transitions = state.filter.set_filter(
                CategoryFilter::parse(&tag),
                &state.catalog,
                &state.settings.timing,
            );
            for transition in transitions {
                let (task, delay_ms) = match transition {
                    FilterTransition::Reveal { entry, delay_ms } => {
                        (TimerTask::RevealEntry(entry), delay_ms)
                    }
                    FilterTransition::Hide { entry, delay_ms } => {
                        (TimerTask::HideEntry(entry), delay_ms)
                    }
                };
                let task_id = schedule(state, task, delay_ms, &mut effects);
                state.filter.remember_task(task_id);
            }
        }
        GalleryAction::OpenEntry { entry_id } => {
            let was_open = state.modal.is_open();
            state
                .modal
                .open(&state.catalog, entry_id)
                .ok_or(ReducerError::EntryNotFound)?;
            if !was_open {
                effects.push(RuntimeEffect::SetBodyScrollLocked(true));
            }
        }
        // Switching entries re-renders the modal media, which drops the old element.
        GalleryAction::NextEntry => {
            state.modal.next(&state.catalog);
        }
        GalleryAction::PreviousEntry => {
            state.modal.previous();
        }
        GalleryAction::CloseModal => {
            if state.modal.is_open() {
                if modal_shows_video(state) {
                    effects.push(RuntimeEffect::PauseModalVideo);
                }
                state.modal.close();
                if !state.upload.open {
                    effects.push(RuntimeEffect::SetBodyScrollLocked(false));
                }
            }
        }
        GalleryAction::AddFiles { files } => {
            let skipped: Vec<BlobKey> = files
                .iter()
                .filter(|file| file.media_kind().is_none())
                .map(|file| file.blob)
                .collect();
            for staged in state.staging.add_files(files) {
                effects.push(RuntimeEffect::CreatePreview {
                    staged_id: staged.id,
                    blob: staged.file.blob,
                });
            }
            if !skipped.is_empty() {
                logging::log!("skipped {} file(s) that are not images or videos", skipped.len());
            }
            effects.extend(skipped.into_iter().map(RuntimeEffect::ForgetFile));
        }
        GalleryAction::PreviewCreated { staged_id, handle } => {
            if let Some(orphan) = state.staging.attach_preview(staged_id, handle) {
                effects.push(RuntimeEffect::RevokePreview(orphan));
            }
        }
        GalleryAction::RemoveStagedFile { staged_id } => {
            let (file, handle) = state
                .staging
                .remove_file(staged_id)
                .ok_or(ReducerError::StagedFileNotFound)?;
            if let Some(handle) = handle {
                effects.push(RuntimeEffect::RevokePreview(handle));
            }
            effects.push(RuntimeEffect::ForgetFile(file.file.blob));
        }
        GalleryAction::OpenUploadDialog { today } => {
            if !state.upload.open {
                state.upload.open = true;
                state.upload.form.date = today.format("%Y-%m-%d").to_string();
                if !state.modal.is_open() {
                    effects.push(RuntimeEffect::SetBodyScrollLocked(true));
                }
            }
        }
        GalleryAction::EditUploadForm(field) => {
            state.upload.form.apply(field);
        }
        GalleryAction::SaveMemory { today } => {
            let form = &state.upload.form;
            state.staging.check_ready(&form.title, &form.description)?;
            let metadata = form.metadata(today, state.settings.default_category())?;
            let committed = state.staging.commit(&metadata, &mut state.catalog)?;
            for id in &committed.entries {
                if let Some(entry) = state.catalog.entry(*id) {
                    state.filter.track_new_entry(entry);
                }
            }
            effects.extend(committed.released.into_iter().map(RuntimeEffect::RevokePreview));
            close_upload_dialog(state, &mut effects);
            notify(
                state,
                NotificationKind::Success,
                MEMORY_SAVED_MESSAGE.to_string(),
                &mut effects,
            );
        }
        GalleryAction::CloseUploadDialog => {
            close_upload_dialog(state, &mut effects);
        }
        GalleryAction::DownloadEntry {
            entry_id,
            now_unix_ms,
        } => {
            let entry = state
                .catalog
                .entry(entry_id)
                .ok_or(ReducerError::EntryNotFound)?;
            effects.push(RuntimeEffect::DownloadMedia {
                media: entry.media.clone(),
                file_name: download_file_name(entry, now_unix_ms),
            });
        }
        GalleryAction::LoadMore => {
            if !state.loading_more {
                state.loading_more = true;
                let delay_ms = state.settings.timing.load_more_delay_ms;
                schedule(state, TimerTask::FinishLoadMore, delay_ms, &mut effects);
            }
        }
        GalleryAction::ShowNotification { kind, message } => {
            notify(state, kind, message, &mut effects);
        }
        GalleryAction::DismissNotification { id } => {
            state.notifications.dismiss(id);
        }
        GalleryAction::TimerElapsed { task } => {
            state.filter.forget_task(task);
            match state.timers.fire(task) {
                Some(TimerTask::RevealEntry(entry)) => state.filter.complete_reveal(entry),
                Some(TimerTask::HideEntry(entry)) => state.filter.complete_hide(entry),
                Some(TimerTask::DismissNotification(id)) => {
                    state.notifications.dismiss(id);
                }
                Some(TimerTask::FinishLoadMore) => {
                    state.loading_more = false;
                    notify(
                        state,
                        NotificationKind::Info,
                        ALL_LOADED_MESSAGE.to_string(),
                        &mut effects,
                    );
                }
                None => {}
            }
        }
        GalleryAction::ToggleNavMenu => {
            state.nav.menu_open = !state.nav.menu_open;
        }
        GalleryAction::CloseNavMenu => {
            state.nav.menu_open = false;
        }
        GalleryAction::NavigateTo { section } => {
            state.nav.menu_open = false;
            effects.push(RuntimeEffect::ScrollToSection(section));
        }
        GalleryAction::ScrollChanged { scroll_y, sections } => {
            state.nav.on_scroll(scroll_y, &sections);
        }
    }

    Ok(effects)
}

/// Like [`reduce_gallery`], but user-facing errors become an error toast instead of an `Err`.
///
/// The failed action leaves `state` untouched either way.
///
/// # Errors
///
/// Returns the [`ReducerError`] for failures that are not user-facing.
pub fn reduce_gallery_with_feedback(
    state: &mut GalleryState,
    action: GalleryAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut next = state.clone();
    match reduce_gallery(&mut next, action) {
        Ok(effects) => {
            *state = next;
            Ok(effects)
        }
        Err(err) if err.is_user_facing() => reduce_gallery(
            state,
            GalleryAction::ShowNotification {
                kind: NotificationKind::Error,
                message: err.to_string(),
            },
        ),
        Err(err) => Err(err),
    }
}

/// File name offered when downloading an entry.
///
/// Images use the title lower-cased with every non-alphanumeric character replaced by `_`;
/// videos are stamped with the download time.
pub fn download_file_name(entry: &GalleryEntry, now_unix_ms: u64) -> String {
    match entry.kind {
        MediaKind::Image => {
            let stem: String = entry
                .title
                .chars()
                .map(|ch| {
                    if ch.is_ascii_alphanumeric() {
                        ch.to_ascii_lowercase()
                    } else {
                        '_'
                    }
                })
                .collect();
            format!("{stem}.jpg")
        }
        MediaKind::Video => format!("video_{now_unix_ms}.mp4"),
    }
}

fn schedule(
    state: &mut GalleryState,
    task: TimerTask,
    delay_ms: u32,
    effects: &mut Vec<RuntimeEffect>,
) -> TaskId {
    let task = state.timers.schedule(task);
    effects.push(RuntimeEffect::ScheduleTimer { task, delay_ms });
    task
}

fn notify(
    state: &mut GalleryState,
    kind: NotificationKind,
    message: String,
    effects: &mut Vec<RuntimeEffect>,
) {
    let id = state.notifications.push(kind, message);
    let delay_ms = state.settings.timing.notification_dismiss_ms;
    schedule(state, TimerTask::DismissNotification(id), delay_ms, effects);
}

fn modal_shows_video(state: &GalleryState) -> bool {
    state
        .modal_entry()
        .is_some_and(|entry| entry.kind == MediaKind::Video)
}

fn close_upload_dialog(state: &mut GalleryState, effects: &mut Vec<RuntimeEffect>) {
    let release = state.staging.clear();
    effects.extend(release.handles.into_iter().map(RuntimeEffect::RevokePreview));
    effects.extend(
        release
            .files
            .into_iter()
            .map(|staged| RuntimeEffect::ForgetFile(staged.file.blob)),
    );
    let was_open = state.upload.open;
    state.upload = crate::staging::UploadDialog::new(state.settings.default_category());
    if was_open && !state.modal.is_open() {
        effects.push(RuntimeEffect::SetBodyScrollLocked(false));
    }
}

#[cfg(test)]
mod tests {
    use platform_host::LocalFile;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::sample_entry;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("date")
    }

    fn image(blob: u64) -> LocalFile {
        LocalFile {
            blob: BlobKey(blob),
            name: format!("photo-{blob}.jpg"),
            mime_type: "image/jpeg".to_string(),
            size: 2048,
        }
    }

    fn reduce(state: &mut GalleryState, action: GalleryAction) -> Vec<RuntimeEffect> {
        reduce_gallery(state, action).expect("reduce")
    }

    #[test]
    fn set_filter_cancels_tasks_of_previous_filter() {
        let mut state = GalleryState::default();
        state.catalog.append(sample_entry("One", &["photos"]));
        state.catalog.append(sample_entry("Two", &["travel"]));

        let first = reduce(
            &mut state,
            GalleryAction::SetFilter {
                tag: "travel".to_string(),
            },
        );
        let RuntimeEffect::ScheduleTimer { task: stale, .. } = first[0] else {
            panic!("expected a scheduled hide, got {first:?}");
        };
        reduce(
            &mut state,
            GalleryAction::SetFilter {
                tag: "all".to_string(),
            },
        );
        assert!(!state.timers.is_pending(stale));

        let before = state.filter.clone();
        reduce(&mut state, GalleryAction::TimerElapsed { task: stale });
        assert_eq!(state.filter, before);
    }

    #[test]
    fn closing_a_video_pauses_it_and_unlocks_scroll() {
        let mut state = GalleryState::default();
        let mut entry = sample_entry("Clip", &["videos"]);
        entry.kind = MediaKind::Video;
        let id = state.catalog.append(entry);

        let opened = reduce(&mut state, GalleryAction::OpenEntry { entry_id: id });
        assert_eq!(opened, vec![RuntimeEffect::SetBodyScrollLocked(true)]);

        let closed = reduce(&mut state, GalleryAction::CloseModal);
        assert_eq!(
            closed,
            vec![
                RuntimeEffect::PauseModalVideo,
                RuntimeEffect::SetBodyScrollLocked(false)
            ]
        );
        assert!(!state.modal.is_open());
        assert!(reduce(&mut state, GalleryAction::CloseModal).is_empty());
    }

    #[test]
    fn stepping_between_videos_leaves_the_new_video_playing() {
        let mut state = GalleryState::default();
        for title in ["ClipA", "ClipB"] {
            let mut entry = sample_entry(title, &["videos"]);
            entry.kind = MediaKind::Video;
            state.catalog.append(entry);
        }
        let first = state.catalog.all()[0].id;
        let second = state.catalog.all()[1].id;
        reduce(&mut state, GalleryAction::OpenEntry { entry_id: first });

        assert!(reduce(&mut state, GalleryAction::NextEntry).is_empty());
        assert_eq!(state.modal_entry().map(|entry| entry.title.as_str()), Some("ClipB"));
        assert!(reduce(&mut state, GalleryAction::PreviousEntry).is_empty());
        assert!(reduce(&mut state, GalleryAction::OpenEntry { entry_id: second }).is_empty());

        let closed = reduce(&mut state, GalleryAction::CloseModal);
        assert!(closed[0].runs_before_render());
        assert!(!closed[1].runs_before_render());
    }

    #[test]
    fn open_unknown_entry_is_an_error() {
        let mut state = GalleryState::default();
        assert_eq!(
            reduce_gallery(
                &mut state,
                GalleryAction::OpenEntry {
                    entry_id: EntryId(99)
                }
            ),
            Err(ReducerError::EntryNotFound)
        );
    }

    #[test]
    fn add_files_requests_previews_and_forgets_skipped_blobs() {
        let mut state = GalleryState::default();
        let mut pdf = image(2);
        pdf.mime_type = "application/pdf".to_string();

        let effects = reduce(
            &mut state,
            GalleryAction::AddFiles {
                files: vec![image(1), pdf],
            },
        );

        let staged_id = state.staging.files()[0].id;
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::CreatePreview {
                    staged_id,
                    blob: BlobKey(1)
                },
                RuntimeEffect::ForgetFile(BlobKey(2)),
            ]
        );
    }

    #[test]
    fn preview_arriving_after_removal_is_revoked_immediately() {
        let mut state = GalleryState::default();
        reduce(&mut state, GalleryAction::AddFiles { files: vec![image(1)] });
        let staged_id = state.staging.files()[0].id;
        let removed = reduce(&mut state, GalleryAction::RemoveStagedFile { staged_id });
        assert_eq!(removed, vec![RuntimeEffect::ForgetFile(BlobKey(1))]);

        let handle = PreviewHandle::new(BlobKey(1), "blob:late");
        let effects = reduce(
            &mut state,
            GalleryAction::PreviewCreated {
                staged_id,
                handle: handle.clone(),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::RevokePreview(handle)]);
    }

    #[test]
    fn save_with_missing_title_is_user_facing_validation_error() {
        let mut state = GalleryState::default();
        reduce(&mut state, GalleryAction::AddFiles { files: vec![image(1)] });
        reduce(
            &mut state,
            GalleryAction::EditUploadForm(UploadFormField::Description("B".to_string())),
        );

        let err = reduce_gallery(&mut state, GalleryAction::SaveMemory { today: today() })
            .expect_err("validation");
        assert_eq!(err, ReducerError::Validation(ValidationError::MissingTitle));
        assert!(err.is_user_facing());
        assert_eq!(state.staging.len(), 1);
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn missing_title_is_reported_before_a_malformed_date() {
        let mut state = GalleryState::default();
        reduce(
            &mut state,
            GalleryAction::EditUploadForm(UploadFormField::Date("19/10/2026".to_string())),
        );
        assert_eq!(
            reduce_gallery(&mut state, GalleryAction::SaveMemory { today: today() }),
            Err(ReducerError::Validation(ValidationError::MissingTitle))
        );

        for field in [
            UploadFormField::Title("Trip".to_string()),
            UploadFormField::Description("Fun".to_string()),
        ] {
            reduce(&mut state, GalleryAction::EditUploadForm(field));
        }
        assert_eq!(
            reduce_gallery(&mut state, GalleryAction::SaveMemory { today: today() }),
            Err(ReducerError::Validation(ValidationError::NoFilesSelected))
        );

        reduce(&mut state, GalleryAction::AddFiles { files: vec![image(1)] });
        assert_eq!(
            reduce_gallery(&mut state, GalleryAction::SaveMemory { today: today() }),
            Err(ReducerError::Validation(ValidationError::InvalidDate))
        );
    }

    #[test]
    fn open_upload_dialog_prefills_today_and_cancel_resets_form() {
        let mut state = GalleryState::default();
        let effects = reduce(&mut state, GalleryAction::OpenUploadDialog { today: today() });
        assert_eq!(effects, vec![RuntimeEffect::SetBodyScrollLocked(true)]);
        assert_eq!(state.upload.form.date, "2026-10-19");

        reduce(
            &mut state,
            GalleryAction::EditUploadForm(UploadFormField::Title("Draft".to_string())),
        );
        reduce(&mut state, GalleryAction::CloseUploadDialog);
        assert!(!state.upload.open);
        assert_eq!(state.upload.form.title, "");
        assert_eq!(state.upload.form.category, "photos");
    }

    #[test]
    fn load_more_ignores_repeat_requests_until_finished() {
        let mut state = GalleryState::default();
        let effects = reduce(&mut state, GalleryAction::LoadMore);
        let [RuntimeEffect::ScheduleTimer { task, delay_ms }] = effects[..] else {
            panic!("expected one timer, got {effects:?}");
        };
        assert_eq!(delay_ms, 2_000);
        assert!(reduce(&mut state, GalleryAction::LoadMore).is_empty());

        reduce(&mut state, GalleryAction::TimerElapsed { task });
        assert!(!state.loading_more);
        assert_eq!(state.notifications.items()[0].message, ALL_LOADED_MESSAGE);
    }

    #[test]
    fn notifications_auto_dismiss_when_their_timer_fires() {
        let mut state = GalleryState::default();
        let effects = reduce(
            &mut state,
            GalleryAction::ShowNotification {
                kind: NotificationKind::Info,
                message: "hello".to_string(),
            },
        );
        let [RuntimeEffect::ScheduleTimer { task, delay_ms }] = effects[..] else {
            panic!("expected one timer, got {effects:?}");
        };
        assert_eq!(delay_ms, 5_000);
        reduce(&mut state, GalleryAction::TimerElapsed { task });
        assert!(state.notifications.items().is_empty());
    }

    #[test]
    fn feedback_reducer_turns_validation_errors_into_error_toasts() {
        let mut state = GalleryState::default();
        reduce(
            &mut state,
            GalleryAction::EditUploadForm(UploadFormField::Title("Trip".to_string())),
        );
        reduce(
            &mut state,
            GalleryAction::EditUploadForm(UploadFormField::Description("Fun".to_string())),
        );

        reduce_gallery_with_feedback(&mut state, GalleryAction::SaveMemory { today: today() })
            .expect("feedback");
        let toast = &state.notifications.items()[0];
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.message, ValidationError::NoFilesSelected.to_string());
        assert_eq!(state.upload.form.title, "Trip");

        assert_eq!(
            reduce_gallery_with_feedback(
                &mut state,
                GalleryAction::DownloadEntry {
                    entry_id: EntryId(3),
                    now_unix_ms: 0
                }
            ),
            Err(ReducerError::EntryNotFound)
        );
    }

    #[test]
    fn download_names_follow_media_kind() {
        let mut catalog = crate::catalog::MediaCatalog::default();
        let photo = catalog.append(sample_entry("Our First Date!", &["photos"]));
        let mut clip = sample_entry("Clip", &["videos"]);
        clip.kind = MediaKind::Video;
        let clip = catalog.append(clip);

        let photo = catalog.entry(photo).expect("photo");
        let clip = catalog.entry(clip).expect("clip");
        assert_eq!(download_file_name(photo, 7), "our_first_date_.jpg");
        assert_eq!(download_file_name(clip, 1_700_000_000_000), "video_1700000000000.mp4");
    }

    #[test]
    fn navigate_closes_menu_and_scrolls() {
        let mut state = GalleryState::default();
        reduce(&mut state, GalleryAction::ToggleNavMenu);
        assert!(state.nav.menu_open);
        let effects = reduce(
            &mut state,
            GalleryAction::NavigateTo {
                section: "gallery".to_string(),
            },
        );
        assert!(!state.nav.menu_open);
        assert_eq!(effects, vec![RuntimeEffect::ScrollToSection("gallery".to_string())]);
    }

    #[test]
    fn close_nav_menu_is_idempotent() {
        let mut state = GalleryState::default();
        reduce(&mut state, GalleryAction::ToggleNavMenu);
        assert!(reduce(&mut state, GalleryAction::CloseNavMenu).is_empty());
        assert!(!state.nav.menu_open);
        reduce(&mut state, GalleryAction::CloseNavMenu);
        assert!(!state.nav.menu_open);
    }
}
