use crate::core::listing::{SortBy, SortOrder};
use crate::export::ExportFormat;
use crate::models::DayKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rtogether
#[derive(Parser)]
#[command(
    name = "rtogether",
    version = env!("CARGO_PKG_VERSION"),
    about = "Count the time together and keep birthdays, anniversaries and special days in SQLite",
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

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List keys missing from the configuration file")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing keys with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show how long we have been together
    Together {
        /// Pretend the current instant is NOW (RFC 3339)
        #[arg(long = "now", value_name = "RFC3339")]
        now: Option<String>,

        /// Redraw once per second until interrupted
        #[arg(long = "watch", conflicts_with = "now")]
        watch: bool,

        /// Stop watching after N refreshes
        #[arg(long = "ticks", requires = "watch")]
        ticks: Option<u64>,

        /// Single-line output
        #[arg(long = "compact", conflicts_with = "json")]
        compact: bool,

        /// JSON output
        #[arg(long = "json")]
        json: bool,
    },

    /// Add a special day, or update the one already stored on DATE
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "title")]
        title: Option<String>,

        #[arg(long = "note")]
        note: Option<String>,

        /// birthday and anniversary repeat every year; other happens once
        #[arg(long = "kind", default_value = "other", value_parser = parse_kind)]
        kind: DayKind,

        #[arg(long = "author")]
        author: Option<String>,

        /// Always insert a new event, even if DATE already has one
        #[arg(long = "new")]
        new: bool,
    },

    /// Delete a special day
    Del {
        /// Date (YYYY-MM-DD); without --id the first event of the day is removed
        date: String,

        #[arg(long = "id", help = "Id of the event to delete on DATE")]
        id: Option<i64>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List special days with search, filters, sorting and pages
    List {
        #[arg(long, short = 's', help = "Case-insensitive search in title, note and author")]
        search: Option<String>,

        #[arg(long, value_parser = parse_kind)]
        kind: Option<DayKind>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<String>,

        #[arg(long, value_enum, default_value = "date")]
        sort: SortBy,

        #[arg(long, value_enum, default_value = "asc")]
        order: SortOrder,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long = "page-size", help = "Rows per page (default from config)")]
        page_size: Option<usize>,

        #[arg(long = "json", help = "Print the page as JSON")]
        json: bool,
    },

    /// Show a month calendar with special days and yearly badges
    Calendar {
        #[arg(long, short = 'm', value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,
    },

    /// Export special days
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// FROM:TO (YYYY-MM-DD:YYYY-MM-DD) or "all"
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },
}

/// `--kind` accepts any case, e.g. `Birthday` or `ANNIVERSARY`.
fn parse_kind(s: &str) -> Result<DayKind, String> {
    DayKind::from_input(s).map_err(|e| e.to_string())
}
