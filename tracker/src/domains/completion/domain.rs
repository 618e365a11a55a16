use crate::patches::Patch;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Rolling window after which a completed patch is due for a new run.
pub const RESET_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

pub struct CompletionDomain {
    pub(crate) records: BTreeMap<Patch, Option<Timestamp>>,
}

impl Default for CompletionDomain {
    fn default() -> Self {
        Self::new(Patch::ALL)
    }
}

impl CompletionDomain {
    pub fn new<I: IntoIterator<Item = Patch>>(tracked: I) -> Self {
        Self {
            records: tracked.into_iter().map(|patch| (patch, None)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Completion {
    PatchCompleted { patch: Patch, at: Timestamp },
    RunAvailable { patch: Patch },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CompletionError {
    PatchNotTracked { patch: Patch },
}
