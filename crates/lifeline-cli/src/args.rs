use crate::types::{DialArg, LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lifeline")]
#[command(about = "Emergency contact card with tap-to-call confirmation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $LIFELINE_PATH, then the system data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Card data file (defaults to <data dir>/card.toml, then the built-in card)
    #[arg(long, global = true)]
    pub card: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Overrides LIFELINE_LOG
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[arg(long, default_value = "launch", global = true)]
    pub dial: DialArg,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the card
    Show,

    /// Write the card as a static HTML page
    Html {
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Render the HTML page and open it for printing
    Print,

    /// Call a contact or service by name, after confirmation
    Call {
        name: String,

        /// Confirm without prompting
        #[arg(long, short)]
        yes: bool,
    },

    /// Show confirmed calls
    Log {
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Refresh the last-updated timestamp
    Touch,

    /// Write the default card data file into the data directory
    Init {
        #[arg(long)]
        force: bool,
    },

    /// Interactive card
    Tui,
}
