//! CLI subcommand implementations.

pub mod attendees;
pub mod create_event;
pub mod events;
pub mod login;
pub mod register;
