mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "passin")]
#[command(about = "Browse and manage pass-in event attendees")]
struct Cli {
    /// Output format: table, json, or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the paginated attendee list
    Attendees(commands::attendees::AttendeesArgs),
    /// Browse the paginated event list
    Events(commands::events::EventsArgs),
    /// Register a new attendee
    Register(commands::register::RegisterArgs),
    /// Create a new event
    CreateEvent(commands::create_event::CreateEventArgs),
    /// Log in and store a session token
    Login(commands::login::LoginArgs),
    /// Discard the stored session token
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("passin=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    let config = Config::from_env()?;
    let client = config.client();

    match &cli.command {
        Commands::Attendees(args) => {
            commands::attendees::run(args, &client, &config, &format).await?
        }
        Commands::Events(args) => commands::events::run(args, &client, &config, &format).await?,
        Commands::Register(args) => commands::register::run(args, &client).await?,
        Commands::CreateEvent(args) => commands::create_event::run(args, &client).await?,
        Commands::Login(args) => commands::login::run(args, &client, &config).await?,
        Commands::Logout => {
            config.auth_session().clear()?;
            eprintln!("Session cleared.");
        }
    }

    Ok(())
}
