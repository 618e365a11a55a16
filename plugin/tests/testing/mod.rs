#![allow(dead_code)]

use std::collections::HashMap;

use datamap::Storage;
use plugin::client::{ChatMessageType, Client};
use plugin::config::PluginConfig;
use plugin::DailyTreeRunsPlugin;
use tracker::time::Timestamp;

pub const T0: Timestamp = Timestamp(1_700_000_000_000);

#[derive(Default)]
pub struct RecordingClient {
    pub varbits: HashMap<u32, i32>,
    pub messages: Vec<(ChatMessageType, String)>,
}

impl RecordingClient {
    pub fn set_varbit(&mut self, varbit: u32, value: i32) {
        self.varbits.insert(varbit, value);
    }

    pub fn take_messages(&mut self) -> Vec<String> {
        self.messages
            .drain(..)
            .map(|(_, message)| message)
            .collect()
    }
}

impl Client for RecordingClient {
    fn add_chat_message(&mut self, kind: ChatMessageType, message: &str) {
        self.messages.push((kind, message.to_string()));
    }

    fn get_varbit_value(&self, varbit: u32) -> i32 {
        self.varbits.get(&varbit).copied().unwrap_or(0)
    }
}

pub fn config_tracking(keys: &[&str]) -> PluginConfig {
    PluginConfig {
        tracked_patches: keys.iter().map(|key| key.to_string()).collect(),
        ..PluginConfig::default()
    }
}

pub fn memory_storage() -> Storage {
    Storage::open_in_memory().unwrap()
}

pub fn started(config: PluginConfig) -> DailyTreeRunsPlugin {
    let mut plugin = DailyTreeRunsPlugin::new(config);
    plugin.start_up(memory_storage()).unwrap();
    plugin
}
