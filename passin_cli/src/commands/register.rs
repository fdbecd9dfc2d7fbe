use anyhow::Result;
use clap::Args;
use passin_lib::types::NewAttendee;
use passin_lib::validation;
use passin_lib::Client;

#[derive(Args)]
pub struct RegisterArgs {
    /// Attendee's full name
    #[arg(long)]
    pub name: String,

    /// Attendee's e-mail address
    #[arg(long)]
    pub email: String,
}

pub async fn run(args: &RegisterArgs, client: &Client) -> Result<()> {
    let name = validation::require_non_empty(&args.name, "name")?;
    let email = validation::validate_email(&args.email)?;

    let attendee = NewAttendee { name, email };
    match client.create_attendee(&attendee).await {
        Ok(()) => {
            println!("Attendee registered successfully.");
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("failed to register attendee: {}", e)),
    }
}
