mod attendee;
pub use self::attendee::{Attendee, AttendeeID, NewAttendee};

mod event;
pub use self::event::{Event, EventID, NewEvent};

mod auth;
pub use self::auth::{AuthPayload, Credentials, User};

mod list;
pub use self::list::{AttendeeListResponse, EventListResponse, ListResult};
