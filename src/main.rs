mod args;
mod commands;
mod render;

use anyhow::Result;
use args::EventArgs;
use calink_core::Provider;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calink")]
#[command(about = "Add To Calendar Link Generator")]
#[command(
    long_about = "A simple tool to generate links to add events to calendars \
    (Google Calendar, Outlook Calendar, Yahoo Calendar).\n\n\
    Add the event details and copy the generated links. You can use them in your emails, DMs, etc."
)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the links for an event
    Links {
        #[command(flatten)]
        event: EventArgs,

        /// Only print these providers (repeatable)
        #[arg(short, long = "provider", value_parser = parse_provider)]
        providers: Vec<Provider>,

        /// Time zone for start/end dates (e.g. "Europe/Berlin")
        #[arg(long)]
        tz: Option<String>,

        /// Print a JSON object instead of text
        #[arg(long)]
        json: bool,
    },
    /// Fill in the event interactively, watching the links update
    Form {
        /// Time zone for start/end dates (e.g. "Europe/Berlin")
        #[arg(long)]
        tz: Option<String>,
    },
    /// Open a provider's link in the browser
    Open {
        #[arg(value_parser = parse_provider)]
        provider: Provider,

        #[command(flatten)]
        event: EventArgs,

        /// Time zone for start/end dates (e.g. "Europe/Berlin")
        #[arg(long)]
        tz: Option<String>,
    },
    /// Show config paths and settings
    Config {
        /// Write a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn parse_provider(s: &str) -> Result<Provider, String> {
    s.parse().map_err(|e: calink_core::LinkError| e.to_string())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Links {
            event,
            providers,
            tz,
            json,
        } => commands::links::run(event, providers, tz.as_deref(), json),
        Commands::Form { tz } => commands::form::run(tz.as_deref()),
        Commands::Open {
            provider,
            event,
            tz,
        } => commands::open::run(provider, event, tz.as_deref()),
        Commands::Config { init } => commands::config::run(init),
    }
}
