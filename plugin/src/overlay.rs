use std::collections::BTreeMap;

use tracker::patches::{Patch, WorldPoint};
use tracker::time::Timestamp;

use crate::config::PluginConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Yellow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub patch: Patch,
    pub location: WorldPoint,
    pub color: Color,
}

/// Tile highlights for observed patches, projecting them onto the
/// scene is left to the host.
#[derive(Default)]
pub struct PatchReadyOverlay;

impl PatchReadyOverlay {
    pub fn render(
        &self,
        config: &PluginConfig,
        ready_times: &BTreeMap<Patch, Option<Timestamp>>,
        now: Timestamp,
    ) -> Vec<Marker> {
        if !config.show_overlay {
            return vec![];
        }
        let mut markers = vec![];
        for (patch, ready_at) in ready_times {
            let ready_at = match ready_at {
                Some(ready_at) => *ready_at,
                None => continue,
            };
            let color = if ready_at.is_after(now) {
                Color::Yellow
            } else {
                Color::Green
            };
            markers.push(Marker {
                patch: *patch,
                location: patch.location(),
                color,
            });
        }
        markers
    }
}
