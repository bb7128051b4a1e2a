//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "letters")]
#[command(about = "Letters to the Living: a guided nature walk and writing session", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the session guide
    Guide,

    /// Run a countdown timer
    Timer {
        /// Duration: minutes (15 or 15m) or seconds (90s)
        duration: String,
    },

    /// Export your journal entries as a PDF
    Export {
        /// File holding your answer to Prompt A ("-" reads stdin)
        #[arg(short = 'a', long = "prompt-a", value_name = "FILE")]
        prompt_a: Option<PathBuf>,

        /// File holding your letter for Prompt B ("-" reads stdin)
        #[arg(short = 'b', long = "prompt-b", value_name = "FILE")]
        prompt_b: Option<PathBuf>,

        /// Output file (default: <output_dir>/letters_to_the_living_YYYYMMDD.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the PDF in the configured viewer
        #[arg(long)]
        open: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
