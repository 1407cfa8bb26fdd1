//! Terminal front end for the Registrar check-in console.
//!
//! [`app::Console`] owns all UI state and applies parsed [`command::Command`]s;
//! [`render`] turns the resulting [`app::Outcome`]s into terminal lines.

pub mod app;
pub mod command;
pub mod helper;
pub mod render;
