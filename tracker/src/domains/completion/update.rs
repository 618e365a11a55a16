use crate::completion::Completion::{PatchCompleted, RunAvailable};
use crate::completion::{Completion, CompletionDomain};
use crate::patches::Patch;
use crate::time::Timestamp;

impl CompletionDomain {
    pub fn start_session(&self, now: Timestamp) -> Vec<Completion> {
        self.tracked()
            .filter(|patch| !self.is_completed(*patch, now))
            .map(|patch| RunAvailable { patch })
            .collect()
    }

    /// Marks every pending patch whose display name occurs in the text.
    ///
    /// Plain substring match, so an unrelated message that happens to mention
    /// a patch name completes it too.
    pub fn detect_completions(&mut self, text: &str, now: Timestamp) -> Vec<Completion> {
        let matched: Vec<Patch> = self
            .tracked()
            .filter(|patch| !self.is_completed(*patch, now))
            .filter(|patch| text.contains(patch.display_name()))
            .collect();
        let mut events = vec![];
        for patch in matched {
            self.records.insert(patch, Some(now));
            events.push(PatchCompleted { patch, at: now });
        }
        events
    }
}
