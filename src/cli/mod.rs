//! CLI subcommand implementations for the sitemapper binary.

pub mod generate_cmd;
pub mod serve_cmd;
