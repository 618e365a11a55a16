use crate::api::TrackerError;
use crate::patches::Patch;
use crate::time::Timestamp;
use crate::DailyTreeRuns;
use log::{info, warn};

pub const CONFIG_GROUP: &str = "dailytreeruns";

pub fn completion_key(patch: Patch) -> String {
    format!("lastCompleted.{}", patch.key())
}

impl DailyTreeRuns {
    pub fn load_completion_records(&mut self) -> Result<(), TrackerError> {
        let mut records = vec![];
        for patch in self.completion.tracked() {
            let key = completion_key(patch);
            let value = match self.storage.get_configuration(CONFIG_GROUP, &key)? {
                Some(value) => value,
                None => continue,
            };
            match value.trim().parse::<u64>() {
                Ok(millis) => records.push((patch, Timestamp(millis))),
                Err(error) => {
                    warn!(
                        "Unable to parse {}.{} value {:?}, treat as never completed, {}",
                        CONFIG_GROUP, key, value, error
                    );
                }
            }
        }
        info!("Load {} completion records", records.len());
        self.completion.load_records(records);
        Ok(())
    }

    pub(crate) fn save_completion_record(
        &self,
        patch: Patch,
        completed_at: Timestamp,
    ) -> Result<(), TrackerError> {
        self.storage.set_configuration(
            CONFIG_GROUP,
            &completion_key(patch),
            &completed_at.as_millis().to_string(),
        )?;
        Ok(())
    }
}
