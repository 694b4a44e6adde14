//! Deterministic effect harness: runs reducer effects against an in-memory object-URL service
//! and a hand-driven clock.

#![allow(dead_code)]

use std::collections::VecDeque;

use chrono::NaiveDate;
use gallery_runtime::{
    catalog::NewEntry,
    host::apply_object_url_effect,
    reduce_gallery,
    scheduler::TaskId,
    EntryId, GalleryAction, GalleryState, MediaRef, ReducerError, RuntimeEffect,
};
use platform_host::{BlobKey, LocalFile, MediaKind, MemoryObjectUrlService, ObjectUrlService};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

pub fn entry(title: &str, tags: &[&str]) -> NewEntry {
    NewEntry {
        kind: MediaKind::Image,
        media: MediaRef::Static {
            path: format!("/assets/{}.jpg", title.to_ascii_lowercase()),
        },
        categories: tags.iter().map(|tag| tag.to_string()).collect(),
        title: title.to_string(),
        description: format!("{title} description"),
        date: today(),
    }
}

pub struct Harness {
    pub state: GalleryState,
    pub urls: MemoryObjectUrlService,
    /// Effects the harness does not execute itself, in emission order.
    pub host_log: Vec<RuntimeEffect>,
    /// Errors reported by the object-URL service when revoking previews.
    pub revoke_errors: Vec<String>,
    now_ms: u64,
    timers: Vec<(u64, TaskId)>,
    next_blob: u64,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            state: GalleryState::default(),
            urls: MemoryObjectUrlService::default(),
            host_log: Vec::new(),
            revoke_errors: Vec::new(),
            now_ms: 0,
            timers: Vec::new(),
            next_blob: 0,
        }
    }

    /// Harness whose catalog holds one entry per `(title, tags)` pair, tracked by the filter.
    pub fn with_entries(entries: &[(&str, &[&str])]) -> (Self, Vec<EntryId>) {
        let mut harness = Self::new();
        let ids = entries
            .iter()
            .map(|(title, tags)| harness.append(entry(title, tags)))
            .collect();
        (harness, ids)
    }

    pub fn append(&mut self, new_entry: NewEntry) -> EntryId {
        let id = self.state.catalog.append(new_entry);
        if let Some(added) = self.state.catalog.entry(id) {
            self.state.filter.track_new_entry(added);
        }
        id
    }

    /// A registered local file with the given MIME type.
    pub fn file(&mut self, name: &str, mime_type: &str) -> LocalFile {
        self.next_blob += 1;
        let blob = BlobKey(self.next_blob);
        self.urls.register(blob);
        LocalFile {
            blob,
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            size: 1_024,
        }
    }

    pub fn dispatch(&mut self, action: GalleryAction) -> Result<(), ReducerError> {
        let effects = reduce_gallery(&mut self.state, action)?;
        self.run(effects);
        Ok(())
    }

    /// Dispatches and panics on reducer errors.
    pub fn send(&mut self, action: GalleryAction) {
        self.dispatch(action).expect("reducer accepted action");
    }

    /// Moves the clock forward, firing every timer that comes due in order.
    pub fn advance(&mut self, ms: u64) {
        let deadline = self.now_ms + ms;
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, (due, _))| *due <= deadline)
                .min_by_key(|(_, (due, task))| (*due, *task))
                .map(|(index, _)| index);
            let Some(index) = next else {
                break;
            };
            let (due, task) = self.timers.remove(index);
            self.now_ms = due;
            self.send(GalleryAction::TimerElapsed { task });
        }
        self.now_ms = deadline;
    }

    pub fn staged_ids(&self) -> Vec<gallery_runtime::staging::StagedFileId> {
        self.state.staging.files().iter().map(|file| file.id).collect()
    }

    fn run(&mut self, effects: Vec<RuntimeEffect>) {
        let mut queue: VecDeque<RuntimeEffect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                RuntimeEffect::ScheduleTimer { task, delay_ms } => {
                    self.timers.push((self.now_ms + u64::from(delay_ms), task));
                }
                RuntimeEffect::RevokePreview(handle) => {
                    if let Err(err) = self.urls.revoke_preview(handle) {
                        self.revoke_errors.push(err);
                    }
                }
                RuntimeEffect::CreatePreview { .. } | RuntimeEffect::ForgetFile(_) => {
                    if let Some(action) = apply_object_url_effect(&self.urls, &effect) {
                        let follow_up = reduce_gallery(&mut self.state, action)
                            .expect("host follow-up accepted");
                        queue.extend(follow_up);
                    }
                }
                other => self.host_log.push(other),
            }
        }
    }
}
