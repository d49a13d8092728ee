//! Shared building blocks for the roomwise workspace: configuration, errors,
//! meeting categories and filter-key normalisation.

pub mod config;
pub mod error;
pub mod types;
pub mod util;
