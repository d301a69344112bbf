//! Terminal front end for the todo service.
//!
//! `view` turns input lines into intents and renders the list, `app` wires
//! them to a `TodoStore`, and `transport` executes requests with ureq.

pub mod app;
pub mod config;
pub mod transport;
pub mod view;

pub use app::run;
pub use config::Config;
pub use transport::UreqTransport;
