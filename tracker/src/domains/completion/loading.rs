use crate::completion::CompletionDomain;
use crate::patches::Patch;
use crate::time::Timestamp;
use log::debug;

impl CompletionDomain {
    pub fn load_records(&mut self, records: Vec<(Patch, Timestamp)>) {
        for (patch, completed_at) in records {
            match self.records.get_mut(&patch) {
                Some(record) => *record = Some(completed_at),
                None => debug!("Skip completion record of untracked patch {:?}", patch),
            }
        }
    }
}
