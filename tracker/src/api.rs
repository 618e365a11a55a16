use crate::completion::{Completion, CompletionError};
use crate::patches::Patches;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Patches(Patches),
    Completion(Completion),
}

impl From<Patches> for Event {
    fn from(event: Patches) -> Self {
        Self::Patches(event)
    }
}

impl From<Completion> for Event {
    fn from(event: Completion) -> Self {
        Self::Completion(event)
    }
}

impl Event {
    /// Chat text for the player, internal state changes have none.
    pub fn message(&self) -> Option<String> {
        match self {
            Event::Patches(Patches::ReadyTimeChanged { .. }) => None,
            Event::Patches(Patches::PatchReady { patch }) => {
                Some(format!("{} tree patch is ready!", patch.display_name()))
            }
            Event::Patches(Patches::AllPatchesReady) => {
                Some("All tracked tree patches are ready for a run!".to_string())
            }
            Event::Completion(Completion::RunAvailable { patch }) => Some(format!(
                "{} tree patch is ready for a new run.",
                patch.display_name()
            )),
            Event::Completion(Completion::PatchCompleted { patch, .. }) => Some(format!(
                "{} tree run completed for today.",
                patch.display_name()
            )),
        }
    }

    pub fn is_reminder(&self) -> bool {
        matches!(
            self,
            Event::Patches(Patches::PatchReady { .. })
                | Event::Patches(Patches::AllPatchesReady)
                | Event::Completion(Completion::RunAvailable { .. })
        )
    }
}

#[derive(Debug)]
pub enum TrackerError {
    Completion(CompletionError),
    Storage(rusqlite::Error),
}

impl From<CompletionError> for TrackerError {
    fn from(error: CompletionError) -> Self {
        Self::Completion(error)
    }
}

impl From<rusqlite::Error> for TrackerError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Storage(error)
    }
}
