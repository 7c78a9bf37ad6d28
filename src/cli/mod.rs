//! CLI module for toolbox - command-line interface and subcommands.
//!
//! Browses and searches the tool catalog and copies text to the clipboard.

pub mod commands;
pub mod output;

pub use commands::Cli;
