//! Event-driven wiring between a page host and the pure core.
//!
//! [`host::Host`] is the only surface that touches a page. [`session::Session`] owns all
//! runtime state and reacts to [`session::Event`]s. [`headless::HeadlessHost`] is an
//! in-memory host for the CLI and tests, and [`document`] serializes one to static HTML.

pub mod document;
pub mod headless;
pub mod host;
pub mod session;
