use anyhow::Result;
use clap::Args;
use passin_lib::types::Event;
use passin_lib::validation;
use passin_lib::{Client, EventQuery, FileLocation, ListSession, Query};

use crate::config::Config;
use crate::output::{page_banner, print_events, OutputFormat};

#[derive(Args)]
pub struct EventsArgs {
    /// Search by event title (resets to page 1)
    #[arg(long)]
    pub search: Option<String>,

    /// Jump to a specific page
    #[arg(long)]
    pub page: Option<i64>,

    /// Go to the first page
    #[arg(long)]
    pub first: bool,

    /// Go to the previous page
    #[arg(long)]
    pub prev: bool,

    /// Go to the next page
    #[arg(long)]
    pub next: bool,

    /// Go to the last page
    #[arg(long)]
    pub last: bool,
}

pub async fn run(
    args: &EventsArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    let mut session: ListSession<Event, FileLocation> =
        ListSession::mount(config.location("events"));

    run_fetch(&mut session, client).await;

    if let Some(ref search) = args.search {
        let sanitized = validation::sanitize_search(search)?;
        session.set_search(&sanitized);
    }
    if let Some(page) = args.page {
        session.go_to_page(page);
    }
    if args.first {
        session.first_page();
    }
    if args.prev {
        session.previous_page();
    }
    if args.next {
        session.next_page();
    }
    if args.last {
        session.last_page();
    }

    run_fetch(&mut session, client).await;

    page_banner(session.view(), "events");
    print_events(session.view(), format)
}

async fn run_fetch(session: &mut ListSession<Event, FileLocation>, client: &Client) {
    while let Some(effect) = session.take_pending_fetch() {
        let query = EventQuery::default()
            .with_page(effect.query.page)
            .with_search(&effect.query.search);
        let outcome = client.get_events(&query).await;
        session.finish_fetch(effect.seq, outcome);
    }
}
