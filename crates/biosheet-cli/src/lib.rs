//! BioSheet CLI Library
//!
//! Command-line interface for collecting biological entity metadata into
//! spreadsheets.
//!
//! # Overview
//!
//! - **Single category**: fetch, export and report one category (`biosheet fetch`)
//! - **All categories**: run every category in order (`biosheet fetch-all`)
//! - **Catalog**: show the categories and their sizes (`biosheet list`)
//! - **Interactive shell**: prompt-driven collection (`biosheet interactive`)

pub mod aggregator;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod progress;

// Re-export commonly used types
pub use aggregator::Aggregator;
pub use config::Config;
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BioSheet - biological entity metadata to spreadsheets
#[derive(Parser, Debug)]
#[command(name = "biosheet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory for exported files (overrides BIOSHEET_OUTPUT_DIR)
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Print the full command reference as Markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one entity type and export it
    Fetch {
        /// Entity type (hormones, enzymes, amino_acids, cells, foreign_amino_acids)
        #[arg(short, long)]
        entity_type: String,

        /// Output format: csv, xlsx or both
        #[arg(short = 'f', long, default_value = "both")]
        output_format: String,

        /// Write a Markdown summary report
        #[arg(short = 'r', long)]
        generate_report: bool,
    },

    /// Fetch every entity type in turn
    FetchAll {
        /// Output format: csv, xlsx or both
        #[arg(short = 'f', long, default_value = "both")]
        output_format: String,

        /// Write a Markdown summary report per entity type
        #[arg(short = 'r', long)]
        generate_report: bool,
    },

    /// List the available entity types
    List,

    /// Prompt-driven collection shell
    Interactive,
}
