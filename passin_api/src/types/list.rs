//! Paginated list responses.
//!
//! List endpoints return the current page's rows under a collection-specific
//! field name (`attendees` or `events`) plus a collection-wide `total`. The
//! per-collection wire shapes are normalized into [`ListResult`].

use serde::{Deserialize, Serialize};

use super::{Attendee, Event};

/// One page of a paginated listing: the rows plus the collection-wide total
/// used to derive the page count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> ListResult<T> {
    /// A result with no rows, used when a fetch failure is collapsed into an
    /// empty page.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Wire shape of `GET /attendees`. Missing fields default to an empty page.
#[derive(Deserialize, Debug)]
pub struct AttendeeListResponse {
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    #[serde(default)]
    pub total: i64,
}

impl From<AttendeeListResponse> for ListResult<Attendee> {
    fn from(body: AttendeeListResponse) -> Self {
        Self {
            items: body.attendees,
            total: body.total,
        }
    }
}

/// Wire shape of `GET /events`. Missing fields default to an empty page.
#[derive(Deserialize, Debug)]
pub struct EventListResponse {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub total: i64,
}

impl From<EventListResponse> for ListResult<Event> {
    fn from(body: EventListResponse) -> Self {
        Self {
            items: body.events,
            total: body.total,
        }
    }
}
