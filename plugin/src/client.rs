use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChatMessageType {
    GameMessage,
    Broadcast,
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    LoginScreen,
    Loading,
    LoggedIn,
    Hopping,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub kind: ChatMessageType,
    pub message: String,
}

/// The game client hosting the plugin.
pub trait Client {
    fn add_chat_message(&mut self, kind: ChatMessageType, message: &str);

    fn get_varbit_value(&self, varbit: u32) -> i32;
}
