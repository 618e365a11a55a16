use crate::patches::{Patch, PatchesDomain};
use crate::time::Timestamp;
use std::collections::BTreeMap;

impl PatchesDomain {
    /// Read only snapshot for presentation, untracked patches are absent.
    pub fn ready_times(&self) -> BTreeMap<Patch, Option<Timestamp>> {
        self.patches
            .iter()
            .map(|(patch, state)| (*patch, state.ready_at))
            .collect()
    }

    pub fn is_ready(&self, patch: Patch, now: Timestamp) -> bool {
        match self.patches.get(&patch).and_then(|state| state.ready_at) {
            Some(ready_at) => !ready_at.is_after(now),
            None => false,
        }
    }

    pub fn is_all_ready(&self, now: Timestamp) -> bool {
        !self.patches.is_empty()
            && self.patches.values().all(|state| match state.ready_at {
                Some(ready_at) => !ready_at.is_after(now),
                None => false,
            })
    }
}
