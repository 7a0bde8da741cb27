use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
/// CLI application to track daily work sessions and calculate pay
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track daily work sessions and calculate pay",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or portable setups)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Override "today" for date-window commands (YYYY-MM-DD)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data directory
    Init,

    /// Register a new account and sign in
    Register {
        /// Email address
        email: String,

        #[arg(long = "password", help = "Account password")]
        password: String,
    },

    /// Sign in with an existing account
    Login {
        /// Email address
        email: String,

        #[arg(long = "password", help = "Account password")]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Save a work session for a date (replaces any existing one)
    Add {
        /// Date of the session (YYYY-MM-DD, default today)
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long = "in", value_name = "HH:MM")]
        start: Option<String>,

        /// End time (HH:MM); earlier than start means overnight
        #[arg(long = "out", value_name = "HH:MM")]
        end: Option<String>,

        /// A 30-minute unpaid break was taken
        #[arg(long = "break")]
        had_break: bool,

        /// Hourly rate for this session (default: current setting)
        #[arg(long = "rate")]
        rate: Option<f64>,

        /// Tax percentage for this session (default: current setting)
        #[arg(long = "tax")]
        tax: Option<f64>,
    },

    /// Edit the stored session for a date
    Edit {
        /// Date of the session to edit (YYYY-MM-DD)
        date: String,

        /// New start time (HH:MM)
        #[arg(long = "in", value_name = "HH:MM")]
        start: Option<String>,

        /// New end time (HH:MM)
        #[arg(long = "out", value_name = "HH:MM")]
        end: Option<String>,

        /// Mark the 30-minute break as taken
        #[arg(long = "break", conflicts_with = "no_break")]
        had_break: bool,

        /// Mark the break as not taken
        #[arg(long = "no-break", conflicts_with = "had_break")]
        no_break: bool,

        /// New hourly rate for the session
        #[arg(long = "rate")]
        rate: Option<f64>,
    },

    /// Delete the session for a date
    Del {
        /// Date of the session to delete (YYYY-MM-DD)
        date: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List recorded sessions, newest first
    List {
        /// Only a given calendar month (YYYY-MM)
        #[arg(long, short, value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// Show the trailing two-week totals
    Stats,

    /// Show a bar chart of hours per recorded day
    Chart,

    /// Show or update the hourly and tax rates
    Rate {
        /// New hourly rate
        #[arg(long)]
        hourly: Option<f64>,

        /// New tax percentage (0-100)
        #[arg(long)]
        tax: Option<f64>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },
}
