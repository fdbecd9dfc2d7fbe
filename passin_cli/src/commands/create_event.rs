use anyhow::Result;
use clap::Args;
use passin_lib::types::NewEvent;
use passin_lib::validation;
use passin_lib::{Client, PassinError};

#[derive(Args)]
pub struct CreateEventArgs {
    /// Event title
    #[arg(long)]
    pub title: String,

    /// Event description
    #[arg(long)]
    pub details: String,

    /// Registration cap
    #[arg(long)]
    pub maximum_attendees: i64,
}

pub async fn run(args: &CreateEventArgs, client: &Client) -> Result<()> {
    let title = validation::require_non_empty(&args.title, "title")?;
    if args.maximum_attendees < 1 {
        return Err(PassinError::InvalidInput(
            "maximum attendees must be at least 1".to_string(),
        )
        .into());
    }

    let event = NewEvent {
        title,
        details: args.details.trim().to_string(),
        maximum_attendees: args.maximum_attendees,
    };
    match client.create_event(&event).await {
        Ok(()) => {
            println!("Event created successfully.");
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("failed to create event: {}", e)),
    }
}
