use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{error, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::core::{
    alerts::{engine::NotificationEngine, model::MatchReason},
    commands::Command,
    config::{ConfigManager, DEFAULT_SETTINGS_FILE},
    coordinator::{Coordinator, SourcedNotification},
    error::Result,
    preferences::{PreferenceSet, SharedPreferences},
};

#[derive(Parser, Debug)]
#[command(name = "roll-watcher", version, about = "Watch roll feeds and report notable characters")]
struct Args {
    /// Settings file seeding the wishlist, wanted series and minimum value
    #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// Feed file (one JSON message per line); repeat for several channels
    #[arg(short, long = "feed", required = true)]
    feeds: Vec<PathBuf>,

    /// Process messages already in the feeds instead of only new ones
    #[arg(long)]
    from_start: bool,

    /// Poll interval in milliseconds
    #[arg(long, default_value_t = 500)]
    poll_ms: u64,

    /// Print notifications as JSON lines
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Also installs the bridge that forwards `log` records.
    if tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init().is_err() {
        eprintln!("Logging was already initialized");
    }
}

pub fn run() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let preferences = match load_preferences(&args.config) {
        Ok(preferences) => preferences,
        Err(e) => {
            error!("{}", e);
            eprintln!("❌ Cannot start without valid settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(watch(args, preferences));
    // The stdin reader sits on a blocking read; don't wait for it.
    runtime.shutdown_background();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_preferences(config: &Path) -> Result<SharedPreferences> {
    let settings = ConfigManager::new(config).load()?;
    let preferences = SharedPreferences::new(PreferenceSet::from_settings(&settings));

    let summary = preferences.summary();
    info!(
        "Loaded {} wishlist names, {} wanted series, min kakera {}",
        summary.wishlist_count, summary.series_count, summary.min_score
    );
    Ok(preferences)
}

async fn watch(args: Args, preferences: SharedPreferences) -> Result<()> {
    let mut coordinator = Coordinator::new(NotificationEngine::new(preferences.clone()));
    for path in &args.feeds {
        coordinator.track(path, args.from_start)?;
        info!("Started tracking: {:?}", path);
    }

    tokio::spawn(read_commands(preferences.clone()));

    let mut interval = tokio::time::interval(Duration::from_millis(args.poll_ms.max(1)));
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let output = coordinator.tick();
                for msg in output.logs {
                    info!("{}", msg);
                }
                for sourced in &output.notifications {
                    deliver(sourced, preferences.min_score(), args.json);
                }
            }
            _ = &mut shutdown => {
                info!("Stopping watcher");
                return Ok(());
            }
        }
    }
}

/// Apply preference commands typed on stdin while the feeds are being watched.
async fn read_commands(preferences: SharedPreferences) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                match Command::parse_from_text(&line) {
                    Some(command) => println!("{}", command.apply(&preferences)),
                    None => println!("Unknown command. Type /help for a list."),
                }
            }
            Ok(None) => {
                info!("Command input closed");
                return;
            }
            Err(e) => {
                warn!("Failed to read command input: {}", e);
                return;
            }
        }
    }
}

fn deliver(sourced: &SourcedNotification, min_score: i64, json: bool) {
    if json {
        match serde_json::to_string(&sourced.notification) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!("Failed to encode notification: {}", e),
        }
    } else {
        println!("{}", render_notification(sourced, min_score));
    }
}

pub fn render_notification(sourced: &SourcedNotification, min_score: i64) -> String {
    let notification = &sourced.notification;
    let mut out = format!(
        "📊 **Character Analysis** [{}]\n**{}**\n💎 Kakera Value: {}",
        sourced.source, notification.character_name, notification.score
    );

    for reason in &notification.reasons {
        let line = match reason {
            MatchReason::OnWishlist => format!("⭐ {}", reason.description()),
            MatchReason::WantedSeries => format!("📺 {}", reason.description()),
            MatchReason::HighValue => format!("💰 High value character (≥{})!", min_score),
        };
        out.push('\n');
        out.push_str(&line);
    }
    out
}
