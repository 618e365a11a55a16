use crate::completion::Completion::PatchCompleted;
use crate::completion::{Completion, CompletionDomain, CompletionError};
use crate::patches::Patch;
use crate::time::Timestamp;

impl CompletionDomain {
    pub fn mark_completed(
        &mut self,
        patch: Patch,
        now: Timestamp,
    ) -> Result<Vec<Completion>, CompletionError> {
        let record = self
            .records
            .get_mut(&patch)
            .ok_or(CompletionError::PatchNotTracked { patch })?;
        *record = Some(now);
        Ok(vec![PatchCompleted { patch, at: now }])
    }
}
