use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "notes",
    version,
    about = "Summarize notes with AI and manage saved summaries",
    propagate_version = true
)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long = "json-logs", global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize note text from arguments, a file, or stdin
    Summarize {
        /// Note text; joined with spaces
        text: Vec<String>,

        /// Read the note from a file instead
        #[arg(short = 'f', long = "file", conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// List saved summaries, newest first
    List,

    /// Delete a saved summary
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
}
