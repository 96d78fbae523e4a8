//! `storefront-cli` — the interactive storefront session.

pub mod session;

pub use session::Session;
