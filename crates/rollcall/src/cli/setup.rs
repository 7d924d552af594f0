use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "rollcall", bin_name = "rollcall", version = get_version())]
#[command(about = "Check members in and out with NFC tags", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Ledger directory (overrides config and ROLLCALL_DATA)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a member in
    #[command(alias = "in", display_order = 1)]
    CheckIn {
        /// Tag record as JSON; repeat for multi-record tags. Read from stdin when omitted.
        #[arg(long = "tag", value_name = "JSON")]
        tags: Vec<String>,
    },

    /// Check a member out
    #[command(alias = "out", display_order = 2)]
    CheckOut {
        /// Tag record as JSON; repeat for multi-record tags. Read from stdin when omitted.
        #[arg(long = "tag", value_name = "JSON")]
        tags: Vec<String>,
    },

    /// Process a scan with the action given by name (in, out)
    #[command(display_order = 3)]
    Scan {
        action: String,

        #[arg(long = "tag", value_name = "JSON")]
        tags: Vec<String>,
    },

    /// Show who is checked in and how many sessions await the report
    #[command(alias = "ls", display_order = 10)]
    Status,

    /// List completed sessions awaiting the report
    #[command(display_order = 11)]
    Pending,

    /// Compose the report and hand it to the mailer
    #[command(display_order = 20)]
    Report {
        /// Print the report without sending or clearing
        #[arg(long)]
        dry_run: bool,

        /// Write the mail to standard output instead of the outbox
        #[arg(long, conflicts_with = "outbox")]
        stdout: bool,

        /// Outbox directory (default: <data dir>/outbox)
        #[arg(long, value_name = "DIR")]
        outbox: Option<PathBuf>,
    },

    /// Show the effective configuration
    #[command(display_order = 30)]
    Config,
}
