//! `storefront-events` — domain event distribution.
//!
//! Events describe facts that already happened. This crate defines the event
//! contract, a synchronous listener registry for fanning events out to
//! consumers, and a helper for executing aggregate commands.

pub mod event;
pub mod handler;
pub mod listener;

pub use event::Event;
pub use handler::execute;
pub use listener::{EventListener, ListenerSet};
