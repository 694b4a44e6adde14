use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Timing {
    stagger_step_ms: u32,
    hide_transition_ms: u32,
    notification_dismiss_ms: u32,
    load_more_delay_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Category {
    id: String,
    label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry {
    kind: String,
    path: String,
    categories: Vec<String>,
    title: String,
    description: String,
    date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GalleryManifest {
    schema_version: u32,
    page_title: String,
    together_since: String,
    timing: Timing,
    categories: Vec<Category>,
    #[serde(default)]
    entries: Vec<Entry>,
}

fn check_date(field: &str, raw: &str) {
    if NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_err() {
        panic!("gallery manifest: {field} `{raw}` is not a YYYY-MM-DD date");
    }
}

fn validate(manifest: &GalleryManifest) {
    if manifest.schema_version != MANIFEST_SCHEMA_VERSION {
        panic!(
            "gallery manifest schema mismatch: expected {MANIFEST_SCHEMA_VERSION} found {}",
            manifest.schema_version
        );
    }
    check_date("together_since", &manifest.together_since);

    if manifest.categories.is_empty() {
        panic!("gallery manifest: at least one category is required");
    }
    let mut vocabulary = BTreeSet::new();
    for category in &manifest.categories {
        if category.id == "all" {
            panic!("gallery manifest: `all` is reserved and cannot be a category id");
        }
        if category.id.trim().is_empty() || category.id.contains(char::is_whitespace) {
            panic!("gallery manifest: invalid category id `{}`", category.id);
        }
        if !vocabulary.insert(category.id.as_str()) {
            panic!("gallery manifest: duplicate category id `{}`", category.id);
        }
    }

    for entry in &manifest.entries {
        if entry.kind != "image" && entry.kind != "video" {
            panic!(
                "gallery manifest: entry `{}` has unknown kind `{}`",
                entry.title, entry.kind
            );
        }
        if entry.categories.is_empty() {
            panic!("gallery manifest: entry `{}` has no categories", entry.title);
        }
        for tag in &entry.categories {
            if !vocabulary.contains(tag.as_str()) {
                panic!(
                    "gallery manifest: entry `{}` uses unknown category `{tag}`",
                    entry.title
                );
            }
        }
        check_date(&format!("date of `{}`", entry.title), &entry.date);
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("gallery.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: GalleryManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest);

    let json = serde_json::to_string_pretty(&manifest).expect("serialize gallery manifest");
    let generated = format!(
        "/// Build-time generated gallery manifest JSON.\n\
pub const GALLERY_MANIFEST_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("gallery_manifest_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
