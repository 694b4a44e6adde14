//! Category filter controller.
//!
//! Filtering partitions the whole catalog into visible and hidden entries. Entries that become
//! visible are revealed one after another (`index * stagger_step_ms`, where `index` is the
//! position in the full catalog); entries that become hidden keep rendering in a `Leaving`
//! phase so the exit transition can play, then drop out after `hide_transition_ms`.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    catalog::MediaCatalog,
    model::{EntryId, GalleryEntry, GalleryTiming},
    scheduler::TaskId,
};

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Tag(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Tag(tag) => tag,
        }
    }

    /// Exact tag membership; `All` matches everything.
    pub fn matches(&self, categories: &BTreeSet<String>) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => categories.contains(tag),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryVisibility {
    #[default]
    Visible,
    /// Matches the filter; waiting for its staggered reveal.
    Entering,
    /// No longer matches; still rendered while the exit transition plays.
    Leaving,
    Hidden,
}

impl EntryVisibility {
    /// Whether the entry currently occupies space in the grid.
    pub fn is_displayed(self) -> bool {
        matches!(self, Self::Visible | Self::Leaving)
    }

    /// Whether the entry is on the visible side of the active partition.
    pub fn is_filtered_in(self) -> bool {
        matches!(self, Self::Visible | Self::Entering)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTransition {
    Reveal { entry: EntryId, delay_ms: u32 },
    Hide { entry: EntryId, delay_ms: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    active: CategoryFilter,
    visibility: BTreeMap<EntryId, EntryVisibility>,
    pending_tasks: Vec<TaskId>,
}

impl FilterState {
    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    pub fn visibility(&self, id: EntryId) -> EntryVisibility {
        self.visibility.get(&id).copied().unwrap_or_default()
    }

    /// Makes `filter` the sole active category and returns the delayed transitions to schedule.
    pub fn set_filter(
        &mut self,
        filter: CategoryFilter,
        catalog: &MediaCatalog,
        timing: &GalleryTiming,
    ) -> Vec<FilterTransition> {
        self.active = filter;
        let mut transitions = Vec::new();
        for (index, entry) in catalog.all().iter().enumerate() {
            let current = self.visibility(entry.id);
            let next = if self.active.matches(&entry.categories) {
                match current {
                    EntryVisibility::Visible | EntryVisibility::Leaving => {
                        EntryVisibility::Visible
                    }
                    EntryVisibility::Entering | EntryVisibility::Hidden => {
                        transitions.push(FilterTransition::Reveal {
                            entry: entry.id,
                            delay_ms: stagger_delay(index, timing.stagger_step_ms),
                        });
                        EntryVisibility::Entering
                    }
                }
            } else {
                match current {
                    EntryVisibility::Visible | EntryVisibility::Leaving => {
                        transitions.push(FilterTransition::Hide {
                            entry: entry.id,
                            delay_ms: timing.hide_transition_ms,
                        });
                        EntryVisibility::Leaving
                    }
                    EntryVisibility::Entering | EntryVisibility::Hidden => EntryVisibility::Hidden,
                }
            };
            self.visibility.insert(entry.id, next);
        }
        transitions
    }

    /// Places a freshly appended entry on the correct side of the active filter.
    pub fn track_new_entry(&mut self, entry: &GalleryEntry) {
        let visibility = if self.active.matches(&entry.categories) {
            EntryVisibility::Visible
        } else {
            EntryVisibility::Hidden
        };
        self.visibility.insert(entry.id, visibility);
    }

    pub fn complete_reveal(&mut self, id: EntryId) {
        if let Some(visibility) = self.visibility.get_mut(&id) {
            if *visibility == EntryVisibility::Entering {
                *visibility = EntryVisibility::Visible;
            }
        }
    }

    pub fn complete_hide(&mut self, id: EntryId) {
        if let Some(visibility) = self.visibility.get_mut(&id) {
            if *visibility == EntryVisibility::Leaving {
                *visibility = EntryVisibility::Hidden;
            }
        }
    }

    /// Hands back the tasks scheduled by the previous filter change so they can be cancelled.
    pub fn take_pending_tasks(&mut self) -> Vec<TaskId> {
        std::mem::take(&mut self.pending_tasks)
    }

    pub fn remember_task(&mut self, task: TaskId) {
        self.pending_tasks.push(task);
    }

    pub fn forget_task(&mut self, task: TaskId) {
        self.pending_tasks.retain(|pending| *pending != task);
    }

    /// Ids whose settled state is visible.
    pub fn visible_ids(&self, catalog: &MediaCatalog) -> Vec<EntryId> {
        catalog
            .all()
            .iter()
            .filter(|entry| self.visibility(entry.id) == EntryVisibility::Visible)
            .map(|entry| entry.id)
            .collect()
    }
}

fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}
