use crate::patches::{Patch, PatchState, PatchesDomain, PatchesError};

impl PatchesDomain {
    pub fn get_patch(&self, patch: Patch) -> Result<&PatchState, PatchesError> {
        self.patches
            .get(&patch)
            .ok_or(PatchesError::PatchNotTracked { patch })
    }

    #[inline]
    pub fn is_tracked(&self, patch: Patch) -> bool {
        self.patches.contains_key(&patch)
    }

    pub fn tracked(&self) -> impl Iterator<Item = Patch> + '_ {
        self.patches.keys().copied()
    }

    #[inline]
    pub fn is_run_notified(&self) -> bool {
        self.run_notified
    }
}
