//! Build-time gallery manifest: page settings, category vocabulary, and static entries.

use std::sync::OnceLock;

use chrono::NaiveDate;
use platform_host::MediaKind;
use serde::Deserialize;

use crate::{
    catalog::NewEntry,
    model::{CategoryOption, GallerySettings, GalleryState, GalleryTiming, MediaRef},
};

include!(concat!(env!("OUT_DIR"), "/gallery_manifest_generated.rs"));

/// Root under which static entry paths are served.
pub const STATIC_ASSET_ROOT: &str = "/assets";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestEntry {
    pub kind: MediaKind,
    pub path: String,
    pub categories: Vec<String>,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryManifest {
    pub schema_version: u32,
    pub page_title: String,
    pub together_since: NaiveDate,
    pub timing: GalleryTiming,
    pub categories: Vec<CategoryOption>,
    #[serde(default)]
    pub entries: Vec<ManifestEntry>,
}

impl GalleryManifest {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn settings(&self) -> GallerySettings {
        GallerySettings {
            page_title: self.page_title.clone(),
            together_since: self.together_since,
            categories: self.categories.clone(),
            timing: self.timing,
        }
    }

    /// Initial page state with every static entry appended in manifest order.
    pub fn initial_state(&self) -> GalleryState {
        let mut state = GalleryState::new(self.settings());
        for entry in &self.entries {
            let id = state.catalog.append(NewEntry {
                kind: entry.kind,
                media: MediaRef::Static {
                    path: format!("{STATIC_ASSET_ROOT}/{}", entry.path),
                },
                categories: entry.categories.iter().cloned().collect(),
                title: entry.title.clone(),
                description: entry.description.clone(),
                date: entry.date,
            });
            if let Some(added) = state.catalog.entry(id) {
                state.filter.track_new_entry(added);
            }
        }
        state
    }
}

/// Returns the manifest compiled into this build.
pub fn gallery_manifest() -> &'static GalleryManifest {
    static MANIFEST: OnceLock<GalleryManifest> = OnceLock::new();
    MANIFEST.get_or_init(|| {
        GalleryManifest::parse(GALLERY_MANIFEST_JSON)
            .expect("generated gallery manifest should parse")
    })
}
