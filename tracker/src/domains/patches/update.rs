use crate::patches::Patches::{AllPatchesReady, PatchReady};
use crate::patches::{Patches, PatchesDomain};
use crate::time::Timestamp;

impl PatchesDomain {
    pub fn update(&mut self, now: Timestamp) -> Vec<Patches> {
        let mut events = vec![];
        for (patch, state) in self.patches.iter_mut() {
            if state.notified {
                continue;
            }
            if let Some(ready_at) = state.ready_at {
                if !ready_at.is_after(now) {
                    state.notified = true;
                    events.push(PatchReady { patch: *patch });
                }
            }
        }
        if !self.run_notified && self.is_all_ready(now) {
            self.run_notified = true;
            events.push(AllPatchesReady);
        }
        events
    }
}
