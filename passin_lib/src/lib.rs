//! Library layer for the pass-in client: the paginated list core (location
//! store, query state, reducer, pagination actions), persisted login
//! sessions, and input validation.
//!
//! The attendee and event list views share one mechanism: a query read from
//! and written back to a location store, a fetch issued per distinct query,
//! and a small state machine deriving what to render from the settled fetch.

pub mod auth;
pub mod error;
pub mod list;
pub mod location;
pub mod session;
pub mod validation;

pub use passin_api;
pub use passin_api::types;
pub use passin_api::{AttendeeQuery, Client, EventQuery, ListQueryCommon, Query};

pub use auth::AuthSession;
pub use error::PassinError;
pub use list::{total_pages, FetchEffect, ListEvent, ListQuery, ListState, ListView, PAGE_SIZE};
pub use location::{FileLocation, LocationStore, MemoryLocation};
pub use session::{ListSession, PARAM_PAGE, PARAM_SEARCH};
