use crate::patches::Patches::ReadyTimeChanged;
use crate::patches::{Patch, Patches, PatchesDomain, PatchesError};
use crate::time::Timestamp;
use log::debug;

impl PatchesDomain {
    pub fn handle_raw_state(
        &mut self,
        patch: Patch,
        raw_value: i32,
        now: Timestamp,
    ) -> Result<Vec<Patches>, PatchesError> {
        let state = self
            .patches
            .get_mut(&patch)
            .ok_or(PatchesError::PatchNotTracked { patch })?;
        let kind = patch.kind();
        let ready_at = if raw_value == kind.grown_value {
            Some(now)
        } else if raw_value > 0 {
            Some(now.plus(kind.growth_time))
        } else {
            None
        };
        debug!(
            "Patch {:?} raw state {} at {}, ready at {:?}",
            patch, raw_value, now, ready_at
        );
        state.ready_at = ready_at;
        state.notified = false;
        self.run_notified = false;
        Ok(vec![ReadyTimeChanged { patch, ready_at }])
    }
}
