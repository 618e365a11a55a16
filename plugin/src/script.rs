use std::collections::HashMap;

use log::info;
use serde::{Deserialize, Serialize};
use tracker::time::Timestamp;

use crate::client::{ChatMessage, ChatMessageType, Client, GameState};
use crate::DailyTreeRunsPlugin;

/// One recorded host event, `at` is epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScriptEvent {
    GameStateChanged {
        at: u64,
        state: GameState,
    },
    VarbitChanged {
        at: u64,
        varbit: u32,
        value: i32,
    },
    GameTick {
        at: u64,
    },
    ChatMessage {
        at: u64,
        kind: ChatMessageType,
        message: String,
    },
}

impl ScriptEvent {
    pub fn at(&self) -> Timestamp {
        match self {
            ScriptEvent::GameStateChanged { at, .. }
            | ScriptEvent::VarbitChanged { at, .. }
            | ScriptEvent::GameTick { at }
            | ScriptEvent::ChatMessage { at, .. } => Timestamp(*at),
        }
    }
}

/// Parses one json event per line, blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>, serde_json::Error> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Stand-in host that keeps varbit values set by the script and records chat.
#[derive(Default)]
pub struct ScriptClient {
    pub varbits: HashMap<u32, i32>,
    pub messages: Vec<(ChatMessageType, String)>,
}

impl Client for ScriptClient {
    fn add_chat_message(&mut self, kind: ChatMessageType, message: &str) {
        info!("Chat [{:?}]: {}", kind, message);
        self.messages.push((kind, message.to_string()));
    }

    fn get_varbit_value(&self, varbit: u32) -> i32 {
        self.varbits.get(&varbit).copied().unwrap_or(0)
    }
}

pub fn replay(plugin: &mut DailyTreeRunsPlugin, client: &mut ScriptClient, events: &[ScriptEvent]) {
    for event in events {
        let now = event.at();
        match event {
            ScriptEvent::GameStateChanged { state, .. } => {
                plugin.on_game_state_changed(client, *state, now)
            }
            ScriptEvent::VarbitChanged { varbit, value, .. } => {
                client.varbits.insert(*varbit, *value);
                plugin.on_varbit_changed(client, *varbit, now)
            }
            ScriptEvent::GameTick { .. } => plugin.on_game_tick(client, now),
            ScriptEvent::ChatMessage { kind, message, .. } => {
                let message = ChatMessage {
                    kind: *kind,
                    message: message.clone(),
                };
                plugin.on_chat_message(client, &message, now)
            }
        }
    }
}
