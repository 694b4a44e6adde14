//! Cancelable delayed tasks for staggered and deferred visual transitions.
//!
//! The queue only tracks identity and payload. The host arms a real timer for every
//! [`crate::reducer::RuntimeEffect::ScheduleTimer`] and reports back with
//! [`crate::reducer::GalleryAction::TimerElapsed`]; tasks cancelled in between are dropped
//! when they fire, so tests can drive time by hand.

use std::collections::BTreeMap;

use crate::{model::EntryId, notifications::NotificationId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    RevealEntry(EntryId),
    HideEntry(EntryId),
    DismissNotification(NotificationId),
    FinishLoadMore,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimerQueue {
    next_id: u64,
    pending: BTreeMap<TaskId, TimerTask>,
}

impl TimerQueue {
    pub fn schedule(&mut self, task: TimerTask) -> TaskId {
        self.next_id = self.next_id.saturating_add(1);
        let id = TaskId(self.next_id);
        self.pending.insert(id, task);
        id
    }

    pub fn cancel(&mut self, id: TaskId) -> Option<TimerTask> {
        self.pending.remove(&id)
    }

    /// Takes a task whose timer elapsed. Returns `None` if it was cancelled or already fired.
    pub fn fire(&mut self, id: TaskId) -> Option<TimerTask> {
        self.pending.remove(&id)
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
