use anyhow::Result;
use chrono::{DateTime, Utc};
use passin_lib::types::{Attendee, Event};
use passin_lib::{ListState, ListView};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Tabled, Serialize)]
struct AttendeeRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "E-mail")]
    #[serde(rename = "E-mail")]
    email: String,
    #[tabled(rename = "Registered")]
    #[serde(rename = "Registered")]
    registered: String,
    #[tabled(rename = "Checked in")]
    #[serde(rename = "Checked in")]
    checked_in: String,
}

#[derive(Tabled, Serialize)]
struct EventRow {
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Details")]
    #[serde(rename = "Details")]
    details: String,
    #[tabled(rename = "Attendees")]
    #[serde(rename = "Attendees")]
    attendees: String,
}

/// Writes `Page x/y (n total <noun>)` to stderr so piped stdout stays
/// machine-readable.
pub fn page_banner<T>(view: &ListView<T>, noun: &str) {
    eprintln!(
        "Page {}/{} ({} total {})",
        view.query().page,
        view.total_pages(),
        view.total(),
        noun
    );
}

pub fn print_attendees(view: &ListView<Attendee>, format: &OutputFormat) -> Result<()> {
    let items = match view.state() {
        ListState::Populated(items) => items.as_slice(),
        _ => {
            println!("No attendees found");
            return Ok(());
        }
    };

    match format {
        OutputFormat::Json => print_json(items),
        OutputFormat::Table => {
            print_table(&build_attendee_rows(items, Utc::now()));
            Ok(())
        }
        OutputFormat::Csv => print_csv(&build_attendee_rows(items, Utc::now())),
    }
}

pub fn print_events(view: &ListView<Event>, format: &OutputFormat) -> Result<()> {
    let items = match view.state() {
        ListState::Populated(items) => items.as_slice(),
        _ => {
            println!("No events found");
            return Ok(());
        }
    };

    match format {
        OutputFormat::Json => print_json(items),
        OutputFormat::Table => {
            print_table(&build_event_rows(items));
            Ok(())
        }
        OutputFormat::Csv => print_csv(&build_event_rows(items)),
    }
}

fn build_attendee_rows(attendees: &[Attendee], now: DateTime<Utc>) -> Vec<AttendeeRow> {
    attendees
        .iter()
        .map(|a| AttendeeRow {
            id: a.id.clone(),
            name: a.name.clone(),
            email: a.email.clone(),
            registered: relative_to(&a.created_at, now),
            checked_in: a
                .checked_in_at
                .as_ref()
                .map(|d| relative_to(d, now))
                .unwrap_or_else(|| "not checked in".to_string()),
        })
        .collect()
}

fn build_event_rows(events: &[Event]) -> Vec<EventRow> {
    events
        .iter()
        .map(|e| EventRow {
            title: e.title.clone(),
            slug: e.slug.clone(),
            details: e.details.clone(),
            attendees: format!("{}/{}", e.attendees_amount, e.maximum_attendees),
        })
        .collect()
}

/// Coarse relative time for list columns, e.g. "3 days ago".
fn relative_to(date: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(*date);
    if delta.num_seconds() < 60 {
        "just now".to_string()
    } else if delta.num_minutes() < 60 {
        format!("{} minutes ago", delta.num_minutes())
    } else if delta.num_hours() < 24 {
        format!("{} hours ago", delta.num_hours())
    } else {
        format!("{} days ago", delta.num_days())
    }
}

fn print_table<R: Tabled>(rows: &[R]) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn print_json<R: Serialize>(rows: &[R]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

fn print_csv<R: Serialize>(rows: &[R]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
