use std::fs;
use std::path::Path;

use log::{error, info, warn};
use tracker::patches::Patch;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PluginConfig {
    #[serde(default = "default_greeting")]
    pub greeting: String,

    #[serde(default = "default_show_overlay")]
    pub show_overlay: bool,

    #[serde(default = "default_reminders_enabled")]
    pub reminders_enabled: bool,

    #[serde(default = "default_tracked_patches")]
    pub tracked_patches: Vec<String>,

    #[serde(default = "default_database")]
    pub database: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        PluginConfig {
            greeting: default_greeting(),
            show_overlay: default_show_overlay(),
            reminders_enabled: default_reminders_enabled(),
            tracked_patches: default_tracked_patches(),
            database: default_database(),
        }
    }
}

pub const PLUGIN_CONFIG_PATH: &'static str = "./dailytree.json";

impl PluginConfig {
    pub fn load() -> Self {
        Self::load_from(PLUGIN_CONFIG_PATH)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(data) => match serde_json::from_slice(&data) {
                Ok(config) => {
                    info!("Uses {}", path.display());
                    config
                }
                Err(error) => {
                    error!("Unable to parse config file, {error:?}");
                    PluginConfig::default()
                }
            },
            _ => {
                info!("Uses default config, {} not found", path.display());
                PluginConfig::default()
            }
        }
    }

    /// Configured patches in declaration order, unknown keys are dropped.
    pub fn tracked(&self) -> Vec<Patch> {
        let mut tracked = vec![];
        for key in &self.tracked_patches {
            match Patch::from_key(key) {
                Some(patch) if !tracked.contains(&patch) => tracked.push(patch),
                Some(_) => {}
                None => warn!("Unknown patch {:?} in tracked patches", key),
            }
        }
        tracked
    }
}

fn default_greeting() -> String {
    String::from("Hello")
}

fn default_show_overlay() -> bool {
    true
}

fn default_reminders_enabled() -> bool {
    true
}

fn default_tracked_patches() -> Vec<String> {
    Patch::ALL.iter().map(|patch| patch.key().to_string()).collect()
}

fn default_database() -> String {
    String::from("./dailytree.sqlite")
}
