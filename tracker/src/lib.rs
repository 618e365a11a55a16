use datamap::Storage;
use log::{debug, error, info};

pub use domains::*;
pub use persistence::{completion_key, CONFIG_GROUP};

use crate::api::{Event, TrackerError};
use crate::completion::{Completion, CompletionDomain};
use crate::patches::{Patch, PatchesDomain};
use crate::time::Timestamp;

pub mod api;
mod domains;
mod persistence;
pub mod time;

/// One play session of tree run tracking.
///
/// Readiness timers live only as long as the session, completion records
/// go through the storage and survive it.
pub struct DailyTreeRuns {
    pub patches: PatchesDomain,
    pub completion: CompletionDomain,
    storage: Storage,
}

impl DailyTreeRuns {
    pub fn new(storage: Storage, tracked: &[Patch]) -> Self {
        Self {
            patches: PatchesDomain::new(tracked.iter().copied()),
            completion: CompletionDomain::new(tracked.iter().copied()),
            storage,
        }
    }

    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn start_up(&mut self) -> Result<(), TrackerError> {
        info!("Begin tree runs session");
        self.storage.setup_configuration()?;
        self.load_completion_records()
    }

    pub fn shut_down(&mut self) {
        info!("End tree runs session");
        self.patches.clear();
    }

    /// State update addressed by patch key, unknown keys are ignored.
    pub fn on_key_state_changed(
        &mut self,
        key: &str,
        raw_value: i32,
        now: Timestamp,
    ) -> Vec<Event> {
        match Patch::from_key(key) {
            Some(patch) => self.on_state_changed(patch, raw_value, now),
            None => {
                debug!("Ignore state change of unknown patch {:?}", key);
                vec![]
            }
        }
    }

    pub fn on_state_changed(
        &mut self,
        patch: Patch,
        raw_value: i32,
        now: Timestamp,
    ) -> Vec<Event> {
        match self.patches.handle_raw_state(patch, raw_value, now) {
            Ok(events) => occur(events),
            Err(error) => {
                debug!("Ignore state change, {:?}", error);
                vec![]
            }
        }
    }

    pub fn on_tick(&mut self, now: Timestamp) -> Vec<Event> {
        occur(self.patches.update(now))
    }

    pub fn on_login(&mut self, now: Timestamp) -> Vec<Event> {
        occur(self.completion.start_session(now))
    }

    pub fn on_broadcast(&mut self, text: &str, now: Timestamp) -> Vec<Event> {
        let events = self.completion.detect_completions(text, now);
        self.persist_completions(&events);
        occur(events)
    }

    pub fn complete_patch(
        &mut self,
        patch: Patch,
        now: Timestamp,
    ) -> Result<Vec<Event>, TrackerError> {
        let events = self.completion.mark_completed(patch, now)?;
        self.persist_completions(&events);
        Ok(occur(events))
    }

    fn persist_completions(&self, events: &[Completion]) {
        for event in events {
            if let Completion::PatchCompleted { patch, at } = event {
                info!("Patch {:?} completed at {}", patch, at);
                if let Err(error) = self.save_completion_record(*patch, *at) {
                    error!("Unable to save completion of {:?}, {:?}", patch, error);
                }
            }
        }
    }
}

#[inline]
fn occur<T: Into<Event>>(events: Vec<T>) -> Vec<Event> {
    events.into_iter().map(T::into).collect()
}
