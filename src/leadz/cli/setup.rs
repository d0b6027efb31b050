use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "leadz", bin_name = "leadz", version)]
#[command(about = "Track sales leads from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $LEADZ_HOME or the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new lead
    #[command(alias = "n")]
    Add {
        #[command(flatten)]
        fields: LeadFields,
    },

    /// List leads, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Case-insensitive text to look for in name or phone
        #[arg(short, long)]
        search: Option<String>,

        /// Only show leads with exactly this status
        #[arg(long)]
        status: Option<String>,
    },

    /// Show every field of one or more leads
    #[command(alias = "v")]
    View {
        /// Lead indexes or ids (e.g. 1 3 lq3k9x2a-...)
        #[arg(required = true, num_args = 1..)]
        leads: Vec<String>,
    },

    /// Change a lead; omitted fields keep their current value
    #[command(alias = "e")]
    Edit {
        /// Lead index or id
        lead: String,

        #[command(flatten)]
        fields: LeadFields,
    },

    /// Delete a lead after confirmation
    #[command(alias = "rm")]
    Delete {
        /// Lead index or id
        lead: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (sources, statuses)
        key: Option<String>,

        /// Comma-separated value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and default config
    Init,
}

#[derive(Args, Debug, Default)]
pub struct LeadFields {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Phone number (digits, spaces, - ( ) + .)
    #[arg(long)]
    pub phone: Option<String>,

    /// Where the lead came from (see `leadz config sources`)
    #[arg(long)]
    pub source: Option<String>,

    /// Pipeline status (see `leadz config statuses`)
    #[arg(long)]
    pub status: Option<String>,
}

/// Sends `tracing` output to stderr. `RUST_LOG` overrides the verbosity flag.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("leadz={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
