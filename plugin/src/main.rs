use std::{env, fs, process};

use datamap::Storage;
use log::{error, info};
use plugin::config::PluginConfig;
use plugin::metrics::PluginMetrics;
use plugin::script::{parse_script, replay, ScriptClient};
use plugin::DailyTreeRunsPlugin;
use prometheus::{Encoder, Registry, TextEncoder};
use tracker::CONFIG_GROUP;

fn main() {
    env_logger::init();
    info!("OS: {}", env::consts::OS);
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            error!("Usage: dailytree <script.jsonl>");
            process::exit(2);
        }
    };
    let events = match fs::read_to_string(&path).map(|text| parse_script(&text)) {
        Ok(Ok(events)) => events,
        Ok(Err(error)) => {
            error!("Unable to parse script {}, {}", path, error);
            process::exit(1);
        }
        Err(error) => {
            error!("Unable to read script {}, {}", path, error);
            process::exit(1);
        }
    };

    let config = PluginConfig::load();
    let storage = match Storage::open(&config.database) {
        Ok(storage) => storage,
        Err(error) => {
            error!("Unable to open {}, {}", config.database, error);
            process::exit(1);
        }
    };
    let registry = Registry::new();
    let metrics = match PluginMetrics::new(&registry) {
        Ok(metrics) => metrics,
        Err(error) => {
            error!("Unable to register metrics, {}", error);
            process::exit(1);
        }
    };

    let mut plugin = DailyTreeRunsPlugin::new(config).with_metrics(metrics);
    if let Err(error) = plugin.start_up(storage) {
        error!("Unable to start plugin, {:?}", error);
        process::exit(1);
    }
    let mut client = ScriptClient::default();
    replay(&mut plugin, &mut client, &events);

    if let Some(last) = events.last() {
        for marker in plugin.render_overlay(last.at()) {
            info!(
                "Marker {:?} at {:?} {:?}",
                marker.patch, marker.location, marker.color
            );
        }
    }
    for (kind, message) in &client.messages {
        println!("[{:?}] {}", kind, message);
    }
    let mut buffer = vec![];
    if TextEncoder::new()
        .encode(&registry.gather(), &mut buffer)
        .is_ok()
    {
        info!("Metrics:\n{}", String::from_utf8_lossy(&buffer));
    }
    if let Some(session) = plugin.session() {
        match session.storage().fetch_group(CONFIG_GROUP) {
            Ok(entries) => {
                for entry in entries {
                    info!("Stored {}.{} = {}", entry.group, entry.key, entry.value);
                }
            }
            Err(error) => error!("Unable to list {} records, {}", CONFIG_GROUP, error),
        }
    }
    plugin.shut_down();
    info!("Bye!");
}
