use prometheus::{register_int_counter_with_registry, IntCounter, Registry};

#[derive(Clone)]
pub struct PluginMetrics {
    pub state_updates: IntCounter,
    pub notifications_sent: IntCounter,
    pub completions_recorded: IntCounter,
}

impl PluginMetrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let state_updates = register_int_counter_with_registry!(
            "dailytree_state_updates",
            "dailytree_state_updates",
            registry
        )?;

        let notifications_sent = register_int_counter_with_registry!(
            "dailytree_notifications_sent",
            "dailytree_notifications_sent",
            registry
        )?;

        let completions_recorded = register_int_counter_with_registry!(
            "dailytree_completions_recorded",
            "dailytree_completions_recorded",
            registry
        )?;

        Ok(Self {
            state_updates,
            notifications_sent,
            completions_recorded,
        })
    }
}
