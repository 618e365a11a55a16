use crate::completion::{CompletionDomain, RESET_PERIOD};
use crate::patches::Patch;
use crate::time::Timestamp;

impl CompletionDomain {
    #[inline]
    pub fn last_completed_at(&self, patch: Patch) -> Option<Timestamp> {
        self.records.get(&patch).copied().flatten()
    }

    pub fn is_completed(&self, patch: Patch, now: Timestamp) -> bool {
        match self.last_completed_at(patch) {
            Some(completed_at) => completed_at.plus(RESET_PERIOD).is_after(now),
            None => false,
        }
    }

    pub fn tracked(&self) -> impl Iterator<Item = Patch> + '_ {
        self.records.keys().copied()
    }
}
