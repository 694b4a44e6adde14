use std::collections::BTreeSet;

use chrono::NaiveDate;
use platform_host::{BlobKey, MediaKind};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::MediaCatalog,
    filter::FilterState,
    modal::ModalState,
    navigation::NavState,
    notifications::NotificationCenter,
    scheduler::TimerQueue,
    staging::{UploadDialog, UploadStagingBuffer},
};

pub const DEFAULT_STAGGER_STEP_MS: u32 = 50;
pub const DEFAULT_HIDE_TRANSITION_MS: u32 = 300;
pub const DEFAULT_NOTIFICATION_DISMISS_MS: u32 = 5_000;
pub const DEFAULT_LOAD_MORE_DELAY_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum MediaRef {
    /// Asset bundled with the site.
    Static { path: String },
    /// File picked by the user during this session.
    Session { blob: BlobKey },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: EntryId,
    pub kind: MediaKind,
    pub media: MediaRef,
    pub categories: BTreeSet<String>,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

impl GalleryEntry {
    /// Space-separated category tags, as rendered into `data-category`.
    pub fn category_attr(&self) -> String {
        self.categories
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryTiming {
    pub stagger_step_ms: u32,
    pub hide_transition_ms: u32,
    pub notification_dismiss_ms: u32,
    pub load_more_delay_ms: u32,
}

impl Default for GalleryTiming {
    fn default() -> Self {
        Self {
            stagger_step_ms: DEFAULT_STAGGER_STEP_MS,
            hide_transition_ms: DEFAULT_HIDE_TRANSITION_MS,
            notification_dismiss_ms: DEFAULT_NOTIFICATION_DISMISS_MS,
            load_more_delay_ms: DEFAULT_LOAD_MORE_DELAY_MS,
        }
    }
}

/// Static display configuration shared by every reducer transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySettings {
    pub page_title: String,
    pub together_since: NaiveDate,
    pub categories: Vec<CategoryOption>,
    pub timing: GalleryTiming,
}

impl GallerySettings {
    /// Category preselected in the upload form.
    pub fn default_category(&self) -> &str {
        self.categories
            .first()
            .map(|category| category.id.as_str())
            .unwrap_or("photos")
    }

    pub fn category_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.label.as_str())
            .unwrap_or(id)
    }
}

impl Default for GallerySettings {
    fn default() -> Self {
        let categories = [
            ("photos", "Photos"),
            ("videos", "Videos"),
            ("special", "Special Moments"),
            ("travel", "Travel"),
        ]
        .into_iter()
        .map(|(id, label)| CategoryOption {
            id: id.to_string(),
            label: label.to_string(),
        })
        .collect();
        Self {
            page_title: "Our Memories".to_string(),
            together_since: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            categories,
            timing: GalleryTiming::default(),
        }
    }
}

/// Complete page state owned by the gallery provider.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    pub settings: GallerySettings,
    pub catalog: MediaCatalog,
    pub filter: FilterState,
    pub modal: ModalState,
    pub staging: UploadStagingBuffer,
    pub upload: UploadDialog,
    pub notifications: NotificationCenter,
    pub timers: TimerQueue,
    pub nav: NavState,
    pub loading_more: bool,
}

impl GalleryState {
    pub fn new(settings: GallerySettings) -> Self {
        let upload = UploadDialog::new(settings.default_category());
        Self {
            settings,
            catalog: MediaCatalog::default(),
            filter: FilterState::default(),
            modal: ModalState::default(),
            staging: UploadStagingBuffer::default(),
            upload,
            notifications: NotificationCenter::default(),
            timers: TimerQueue::default(),
            nav: NavState::default(),
            loading_more: false,
        }
    }

    /// Entry currently shown in the media modal, if any.
    pub fn modal_entry(&self) -> Option<&GalleryEntry> {
        self.modal
            .current_index()
            .and_then(|index| self.catalog.get(index))
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(GallerySettings::default())
    }
}
