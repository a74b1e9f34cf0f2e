use std::fs::File;
use std::io::BufReader;
use std::process::exit;
use clap::Parser;
use log::{error, info};
use leecher_tracker::common::common::setup_logging;
use leecher_tracker::config::enums::configuration_error::ConfigurationError;
use leecher_tracker::config::structs::configuration::Configuration;
use leecher_tracker::config::structs::leecher_settings::LeecherSettings;
use leecher_tracker::host::enums::host_event::HostEvent;
use leecher_tracker::host::enums::replay_error::ReplayError;
use leecher_tracker::host::structs::replay_host::ReplayHost;
use leecher_tracker::structs::Cli;
use leecher_tracker::tracker::structs::leecher_tracker::LeecherTracker;

fn load_events(path: &str) -> Result<Vec<HostEvent>, ReplayError>
{
    let file = File::open(path)?;
    HostEvent::parse_script(BufReader::new(file))
}

fn main()
{
    let args = Cli::parse();

    if args.schema {
        match serde_json::to_string_pretty(&LeecherSettings::schema()) {
            Ok(schema) => println!("{schema}"),
            Err(e) => {
                eprintln!("Unable to serialize the settings schema: {e}");
                exit(1);
            }
        }
        return;
    }

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(ConfigurationError::Created(_)) => exit(0),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let events = match &args.events {
        None => Vec::new(),
        Some(path) => match load_events(path) {
            Ok(events) => events,
            Err(e) => {
                error!("[REPLAY] Unable to read {path}: {e}");
                exit(1);
            }
        }
    };

    let mut host = ReplayHost::new(args.buddies, args.watched);
    let mut tracker = LeecherTracker::new(config.plugin.clone());

    let summary = tracker.loaded_notification(&mut host);
    info!("[BOOT] Policy: {summary:?}");

    info!("[REPLAY] Replaying {} events", events.len());
    for event in events.iter() {
        tracker.dispatch(&mut host, event);
    }

    for (user, status) in tracker.tracked_users() {
        info!("[STATUS] {user}: {status}");
    }

    let settings = tracker.unloaded_notification(&mut host);

    if args.save {
        let config = Configuration { plugin: settings, ..config };
        if let Err(e) = config.save(&args.config) {
            error!("[SAVE] Unable to write {}: {e}", args.config);
            exit(1);
        }
        info!("[SAVE] Settings written to {}", args.config);
    }
}
