//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: tools, optionally restricted to one category
//! - categories: all categories
//! - search: keyword search across the catalog
//! - show: details of a single tool
//! - copy: put text on the clipboard

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use toolbox::clipboard::StrategyKind;

/// Toolbox - a catalog of small text and image utilities
#[derive(Parser, Debug)]
#[command(name = "toolbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tools, grouped by category
    List {
        /// Only list tools in this category (e.g. text, encode, network)
        #[arg(long)]
        category: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List categories
    Categories {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Search tools by name, description, or keyword
    Search {
        /// Keyword to search for (empty matches every tool)
        #[arg(default_value = "")]
        keyword: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show details of a tool
    Show {
        /// Tool ID (e.g. json-formatter)
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Copy text to the clipboard (reads stdin when TEXT is omitted)
    Copy {
        /// Text to copy
        text: Option<String>,

        /// Message shown on success
        #[arg(short, long)]
        message: Option<String>,

        /// Strategies to try, in order (system, command); overrides config
        #[arg(short, long, value_delimiter = ',')]
        strategy: Vec<StrategyKind>,
    },
}
