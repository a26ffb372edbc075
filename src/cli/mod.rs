//! Command-line interface components.
//!
//! - [`args`] - clap argument definitions
//! - [`commands`] - Subcommand handlers
//! - [`output`] - Coloured human-readable rendering

pub mod args;
pub mod commands;
pub mod output;
