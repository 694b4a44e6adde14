//! Media modal navigator: `Closed` or `Open(index)` over the full catalog.
//!
//! Boundaries are recomputed from the catalog length at every step, so entries appended while
//! the modal is open are reachable with [`ModalState::next`].

use crate::{
    catalog::MediaCatalog,
    model::{EntryId, GalleryEntry},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Render projection of an open modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalView<'a> {
    pub entry: &'a GalleryEntry,
    pub index: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn current_index(self) -> Option<usize> {
        match self {
            Self::Open { index } => Some(index),
            Self::Closed => None,
        }
    }

    /// Opens on the entry's catalog position. Returns the index, or `None` for unknown entries.
    pub fn open(&mut self, catalog: &MediaCatalog, entry: EntryId) -> Option<usize> {
        let index = catalog.position(entry)?;
        *self = Self::Open { index };
        Some(index)
    }

    /// Steps forward. Returns `false` (and changes nothing) when closed or at the last entry.
    pub fn next(&mut self, catalog: &MediaCatalog) -> bool {
        match *self {
            Self::Open { index } if index + 1 < catalog.len() => {
                *self = Self::Open { index: index + 1 };
                true
            }
            _ => false,
        }
    }

    /// Steps back. Returns `false` (and changes nothing) when closed or at index 0.
    pub fn previous(&mut self) -> bool {
        match *self {
            Self::Open { index } if index > 0 => {
                *self = Self::Open { index: index - 1 };
                true
            }
            _ => false,
        }
    }

    /// Closes the modal and returns the index that was showing.
    pub fn close(&mut self) -> Option<usize> {
        let index = self.current_index();
        *self = Self::Closed;
        index
    }

    pub fn view(self, catalog: &MediaCatalog) -> Option<ModalView<'_>> {
        let index = self.current_index()?;
        let entry = catalog.get(index)?;
        Some(ModalView {
            entry,
            index,
            previous_enabled: index > 0,
            next_enabled: index + 1 < catalog.len(),
        })
    }
}
