use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kronos_correlation::config::{OutputFormat, SortMode};

/// Render KRONOS correlation results with stable HUNTER point colors
#[derive(Parser, Debug)]
#[command(name = "kronos-correlation")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render legend and correlation table for one or more datasets
    Render {
        /// Dataset JSON files, rendered in order within one session
        #[arg(required = true)]
        datasets: Vec<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        #[arg(long, value_enum)]
        sort: Option<SortMode>,
        /// Hide results seen fewer times than this
        #[arg(long)]
        min_occurrences: Option<u32>,
        /// Keep point colors and ordinals when the mission changes
        #[arg(long)]
        keep_caches: bool,
    },
    /// Print the HUNTER point legend of a dataset
    Legend {
        dataset: PathBuf,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Show hash, color and ordinal for point names
    Color {
        #[arg(required = true)]
        points: Vec<String>,
    },
    /// Show or update saved defaults
    Settings {
        #[arg(long, value_enum)]
        sort: Option<SortMode>,
        #[arg(long)]
        min_occurrences: Option<u32>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}
