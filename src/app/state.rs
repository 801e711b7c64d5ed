use std::time::Duration;

use crate::config::FEED;
use crate::feed::Deadline;

pub(crate) enum AppState {
    Loading(LoadingState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState::default())
    }
}

/// Skeleton phase: waiting out the simulated fetch delay for the active tab.
/// Owns the one-shot deadline; leaving the phase drops it.
#[derive(Clone)]
pub(crate) struct LoadingState {
    pub(crate) fetch: Deadline,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            fetch: Deadline::after(FEED.initial_load_delay),
        }
    }
}

/// Live phase: owns the repeating refresh deadline.
#[derive(Clone)]
pub(crate) struct RunningState {
    pub(crate) refresh: Deadline,
}

impl RunningState {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            refresh: Deadline::after(interval),
        }
    }
}
