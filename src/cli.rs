use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "esgform", version, about = "ESG declaration form model CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "ESGFORM_CONFIG",
        help = "Config file (defaults to ~/.config/esgform/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the declaration's sections and fields
    Schema,
    /// Show which fields are active for a draft
    Visibility {
        /// Draft JSON file, or `-` for stdin
        draft: String,
    },
    /// Apply field edits to a draft
    Fill {
        /// Draft to start from, or `-` for stdin
        #[arg(long)]
        from: Option<String>,
        /// Field edit as `id=value` (lists are comma-separated)
        #[arg(long = "set", value_name = "ID=VALUE")]
        sets: Vec<String>,
        /// Mark the declaration as confirmed
        #[arg(long, conflicts_with = "unconfirm")]
        confirm: bool,
        /// Clear the confirmation flag
        #[arg(long)]
        unconfirm: bool,
        /// Write the resulting draft here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate a draft and list blocking errors and warnings
    Validate {
        draft: String,
    },
    /// Summarize every field of a draft, hidden ones at their defaults
    Summarize {
        draft: String,
    },
    /// Submit a draft; exits non-zero when rejected
    Submit {
        draft: String,
        /// Export the accepted summary as JSON
        #[arg(long)]
        export: Option<PathBuf>,
    },
}
