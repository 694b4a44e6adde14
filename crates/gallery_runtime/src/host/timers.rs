use std::time::Duration;

use leptos::{set_timeout, Callable, Callback};

use crate::{reducer::GalleryAction, scheduler::TaskId};

pub(super) fn arm(dispatch: Callback<GalleryAction>, task: TaskId, delay_ms: u32) {
    set_timeout(
        move || dispatch.call(GalleryAction::TimerElapsed { task }),
        Duration::from_millis(u64::from(delay_ms)),
    );
}
