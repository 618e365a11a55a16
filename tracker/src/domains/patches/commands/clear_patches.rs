use crate::patches::{PatchState, PatchesDomain};

impl PatchesDomain {
    pub fn clear(&mut self) {
        for state in self.patches.values_mut() {
            *state = PatchState::default();
        }
        self.run_notified = false;
    }
}
