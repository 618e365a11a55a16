use datamap::Storage;
use log::{debug, info};
use tracker::api::{Event, TrackerError};
use tracker::completion::Completion;
use tracker::patches::Patch;
use tracker::time::Timestamp;
use tracker::DailyTreeRuns;

use crate::client::{ChatMessage, ChatMessageType, Client, GameState};
use crate::config::PluginConfig;
use crate::metrics::PluginMetrics;
use crate::overlay::{Marker, PatchReadyOverlay};

pub mod client;
pub mod config;
pub mod metrics;
pub mod overlay;
pub mod script;

pub struct DailyTreeRunsPlugin {
    config: PluginConfig,
    overlay: PatchReadyOverlay,
    metrics: Option<PluginMetrics>,
    session: Option<DailyTreeRuns>,
}

impl DailyTreeRunsPlugin {
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config,
            overlay: PatchReadyOverlay::default(),
            metrics: None,
            session: None,
        }
    }

    pub fn with_metrics(mut self, metrics: PluginMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    #[inline]
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    #[inline]
    pub fn session(&self) -> Option<&DailyTreeRuns> {
        self.session.as_ref()
    }

    pub fn start_up(&mut self, storage: Storage) -> Result<(), TrackerError> {
        info!("Daily Tree Runs started!");
        let tracked = self.config.tracked();
        info!("Track patches {:?}", tracked);
        let mut session = DailyTreeRuns::new(storage, &tracked);
        session.start_up()?;
        self.session = Some(session);
        Ok(())
    }

    pub fn shut_down(&mut self) {
        info!("Daily Tree Runs stopped!");
        if let Some(mut session) = self.session.take() {
            session.shut_down();
        }
    }

    pub fn on_game_state_changed<C: Client>(
        &mut self,
        client: &mut C,
        state: GameState,
        now: Timestamp,
    ) {
        if state != GameState::LoggedIn {
            return;
        }
        let events = match self.session.as_mut() {
            Some(session) => session.on_login(now),
            None => return,
        };
        let greeting = format!("Daily Tree Runs says {}", self.config.greeting);
        client.add_chat_message(ChatMessageType::GameMessage, &greeting);
        self.deliver(client, events);
    }

    pub fn on_varbit_changed<C: Client>(&mut self, client: &mut C, varbit: u32, now: Timestamp) {
        let patch = match Patch::from_varbit(varbit) {
            Some(patch) => patch,
            None => return,
        };
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => return,
        };
        if !session.patches.is_tracked(patch) {
            return;
        }
        let value = client.get_varbit_value(patch.kind().varbit);
        let events = session.on_state_changed(patch, value, now);
        if let Some(metrics) = &self.metrics {
            metrics.state_updates.inc();
        }
        self.deliver(client, events);
    }

    pub fn on_game_tick<C: Client>(&mut self, client: &mut C, now: Timestamp) {
        let events = match self.session.as_mut() {
            Some(session) => session.on_tick(now),
            None => return,
        };
        self.deliver(client, events);
    }

    pub fn on_chat_message<C: Client>(
        &mut self,
        client: &mut C,
        message: &ChatMessage,
        now: Timestamp,
    ) {
        if !matches!(
            message.kind,
            ChatMessageType::GameMessage | ChatMessageType::Broadcast
        ) {
            return;
        }
        let events = match self.session.as_mut() {
            Some(session) => session.on_broadcast(&message.message, now),
            None => return,
        };
        if let Some(metrics) = &self.metrics {
            let completions = events
                .iter()
                .filter(|event| {
                    matches!(event, Event::Completion(Completion::PatchCompleted { .. }))
                })
                .count();
            metrics.completions_recorded.inc_by(completions as u64);
        }
        self.deliver(client, events);
    }

    pub fn render_overlay(&self, now: Timestamp) -> Vec<Marker> {
        match &self.session {
            Some(session) => {
                self.overlay
                    .render(&self.config, &session.patches.ready_times(), now)
            }
            None => vec![],
        }
    }

    fn deliver<C: Client>(&self, client: &mut C, events: Vec<Event>) {
        for event in events {
            if event.is_reminder() && !self.config.reminders_enabled {
                debug!("Skip reminder {:?}, reminders disabled", event);
                continue;
            }
            if let Some(message) = event.message() {
                client.add_chat_message(ChatMessageType::GameMessage, &message);
                if let Some(metrics) = &self.metrics {
                    metrics.notifications_sent.inc();
                }
            }
        }
    }
}
