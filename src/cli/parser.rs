use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rShiftPerf
#[derive(Parser)]
#[command(
    name = "rshiftperf",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log shift performance, normalize worked hours and score half-month periods",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add or replace the entry of a track for a date
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[arg(long = "track", short = 't', help = "Track: normal (n) or forklift (f)")]
        track: Option<String>,

        #[arg(long = "perf", short = 'p', help = "Raw performance value")]
        performance: String,

        #[arg(long = "hours", help = "Worked hours (0-16); derived from --in/--out when omitted")]
        hours: Option<String>,

        #[arg(long = "in", help = "Sign-in time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "Sign-out time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "overtime", help = "Overtime shift (hours clamped to 8-16)")]
        overtime: bool,

        #[arg(long = "free-day", help = "Shift worked on a free day")]
        free_day: bool,
    },

    /// Delete the entries of a date
    Del {
        date: String,

        #[arg(long = "track", short = 't', help = "Delete only this track")]
        track: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List scored entries
    List {
        #[arg(
            long,
            short,
            help = "YYYY, YYYY-MM, YYYY-MM-DD, a range A:B, or 'all' (default: current month)"
        )]
        period: Option<String>,

        #[arg(long = "track", short = 't', help = "Show only this track")]
        track: Option<String>,
    },

    /// Half-month performance summary
    Summary {
        #[arg(long, short, help = "Month to summarize (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(long, help = "Only one half: first (1-15) or second (16-end)")]
        half: Option<String>,

        #[arg(long = "track", short = 't', help = "Only this track")]
        track: Option<String>,
    },

    /// Show the shift running at a given time (default: now)
    Shift {
        #[arg(long = "at", help = "Time to classify (HH:MM)")]
        at: Option<String>,
    },

    /// Export scored entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "PERIOD",
            help = "YYYY, YYYY-MM, YYYY-MM-DD, a range A:B, or 'all' (default: all)"
        )]
        period: Option<String>,

        #[arg(long = "track", short = 't')]
        track: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
