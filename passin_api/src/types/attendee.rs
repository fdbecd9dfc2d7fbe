//! Attendee types returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an attendee ticket.
pub type AttendeeID = String;

/// An event attendee as returned by the `/attendees` listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    /// Ticket code.
    pub id: AttendeeID,

    /// Attendee's full name.
    pub name: String,

    /// Attendee's e-mail address.
    pub email: String,

    /// When the attendee registered.
    pub created_at: DateTime<Utc>,

    /// When the attendee checked in, if they have.
    pub checked_in_at: Option<DateTime<Utc>>,
}

/// Request body for registering a new attendee.
#[derive(Serialize, Debug, Clone)]
pub struct NewAttendee {
    pub name: String,
    pub email: String,
}
