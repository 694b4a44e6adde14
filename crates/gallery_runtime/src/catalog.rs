//! Ordered, append-only media catalog.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use platform_host::MediaKind;

use crate::model::{EntryId, GalleryEntry, MediaRef};

/// Entry fields supplied by the caller; the catalog assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub kind: MediaKind,
    pub media: MediaRef,
    pub categories: BTreeSet<String>,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaCatalog {
    entries: Vec<GalleryEntry>,
    next_id: u64,
}

impl MediaCatalog {
    /// Appends an entry at the end and returns its id.
    pub fn append(&mut self, entry: NewEntry) -> EntryId {
        debug_assert!(!entry.categories.is_empty(), "entries need a category");
        self.next_id = self.next_id.saturating_add(1);
        let id = EntryId(self.next_id);
        self.entries.push(GalleryEntry {
            id,
            kind: entry.kind,
            media: entry.media,
            categories: entry.categories,
            title: entry.title,
            description: entry.description,
            date: entry.date,
        });
        id
    }

    pub fn all(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryEntry> {
        self.entries.get(index)
    }

    pub fn entry(&self, id: EntryId) -> Option<&GalleryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Position of an entry in insertion order.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

#[cfg(test)]
pub(crate) fn sample_entry(title: &str, tags: &[&str]) -> NewEntry {
    NewEntry {
        kind: MediaKind::Image,
        media: MediaRef::Static {
            path: format!("images/{}.jpg", title.to_ascii_lowercase()),
        },
        categories: tags.iter().map(|tag| tag.to_string()).collect(),
        title: title.to_string(),
        description: format!("{title} description"),
        date: NaiveDate::from_ymd_opt(2024, 2, 14).expect("valid date"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn append_preserves_insertion_order_and_assigns_fresh_ids() {
        let mut catalog = MediaCatalog::default();
        let first = catalog.append(sample_entry("Beach", &["travel"]));
        let second = catalog.append(sample_entry("Cabin", &["photos"]));

        assert_ne!(first, second);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.position(first), Some(0));
        assert_eq!(catalog.position(second), Some(1));
        let titles: Vec<_> = catalog.all().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Beach", "Cabin"]);
    }

    #[test]
    fn lookup_of_unknown_entry_is_none() {
        let catalog = MediaCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.position(EntryId(42)), None);
        assert!(catalog.entry(EntryId(42)).is_none());
    }
}
