#![deny(unsafe_code)]

mod api;
mod common;
mod config;
mod constants;
mod headless;
mod manager;
mod notify;
mod settings;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::api::{HttpTransport, SettingsClient};
use crate::config::ClientConfig;

#[derive(Parser, Debug)]
#[command(name = "bot-settings-panel")]
#[command(version)]
#[command(about = "Settings panel for the poem bot's web dashboard", long_about = None)]
struct Cli {
    /// Dashboard backend to use instead of the one in the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// How verbose the output should be, can be set up to 3 times. Has no effect if RUST_LOG is set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Run one update without opening the panel
    #[command(subcommand)]
    command: Option<headless::Command>,
}

fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "bot_settings_panel=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::builder()
        .with_default_directive(
            default_directive
                .parse()
                .expect("Invalid default log directive"),
        )
        .from_env_lossy();

    // Logs go to stderr so `show` output stays pipeable
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli);

    let mut config = ClientConfig::load().unwrap_or_else(|err| {
        warn!(error = ?err, "Failed to load client config, using defaults");
        ClientConfig::default()
    });
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    match cli.command {
        Some(command) => {
            let client = SettingsClient::new(HttpTransport::from_config(&config));
            headless::run(command, &client)
        }
        // Default mode: open the settings panel
        None => manager::run_gui(config),
    }
}
