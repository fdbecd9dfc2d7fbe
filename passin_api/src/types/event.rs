//! Event types returned by the API.

use serde::{Deserialize, Serialize};

/// Unique identifier for an event (a UUID string).
pub type EventID = String;

/// An event as returned by the `/events` listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventID,

    /// Event title.
    pub title: String,

    /// URL-friendly identifier derived from the title.
    pub slug: String,

    /// Free-form event description.
    pub details: String,

    /// Registration cap.
    pub maximum_attendees: i64,

    /// Number of attendees registered so far.
    pub attendees_amount: i64,
}

/// Request body for creating a new event.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub details: String,
    pub maximum_attendees: i64,
}
