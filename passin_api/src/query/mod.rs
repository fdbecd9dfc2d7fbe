mod common;
pub use self::common::{ListQueryCommon, Query};

mod attendee;
pub use self::attendee::AttendeeQuery;

mod event;
pub use self::event::EventQuery;
