//! Command-line front end: loads meetings, builds the week and renders it.

pub mod command;
pub mod error;
pub mod render;
