//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod dialects;
pub mod input;
pub mod process;
