use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled tables for the terminal
    #[default]
    Term,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "lendadmin",
    bin_name = "lendadmin",
    version,
    disable_help_subcommand = true,
    after_help = "Log in first:\n  lendadmin login --email you@lendsqr.com --password ..."
)]
#[command(about = "Admin console for a lending platform", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(
        long,
        value_enum,
        global = true,
        default_value_t = OutputFormat::Term,
        help_heading = "Options"
    )]
    pub output: OutputFormat,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Load users from this JSON file instead of the embedded dataset
    #[arg(long, global = true, value_name = "PATH", help_heading = "Dataset")]
    pub dataset: Option<PathBuf>,

    /// Generate N deterministic users instead of the embedded dataset
    #[arg(
        long,
        global = true,
        value_name = "N",
        conflicts_with = "dataset",
        help_heading = "Dataset"
    )]
    pub synthetic: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Session(SessionCommands),

    #[command(flatten)]
    Users(UserCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Log in to the console
    #[command(display_order = 1)]
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Log out
    #[command(display_order = 2)]
    Logout,

    /// Show who is logged in
    #[command(display_order = 3)]
    Whoami,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List users, one page at a time
    #[command(alias = "ls", display_order = 10)]
    List(ListArgs),

    /// Show one user's full details
    #[command(alias = "view", display_order = 11)]
    Show { id: String },

    /// Set a user's status to Active
    #[command(display_order = 12)]
    Activate { id: String },

    /// Set a user's status to Blacklisted
    #[command(display_order = 13)]
    Blacklist { id: String },

    /// Set a user's status (Active, Inactive, Pending, Blacklisted)
    #[command(display_order = 14)]
    Status { id: String, status: String },

    /// Dashboard counters
    #[command(display_order = 15)]
    Stats,

    /// Search users by username, email, full name or phone
    #[command(display_order = 16)]
    Search {
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
    },

    /// List organization names
    #[command(display_order = 17)]
    Orgs,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Users per page (10, 25, 50 or 100 in the console; any positive number works)
    #[arg(long, visible_alias = "limit")]
    pub per_page: Option<usize>,

    /// Organization contains
    #[arg(long, help_heading = "Filters")]
    pub org: Option<String>,

    /// Username contains
    #[arg(long, help_heading = "Filters")]
    pub username: Option<String>,

    /// Email contains
    #[arg(long, help_heading = "Filters")]
    pub email: Option<String>,

    /// Phone number contains
    #[arg(long, help_heading = "Filters")]
    pub phone: Option<String>,

    /// Exact status
    #[arg(long, help_heading = "Filters")]
    pub status: Option<String>,

    /// Joined on this day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", help_heading = "Filters")]
    pub joined: Option<String>,

    /// Sort column (org, username, email, phone, joined, status)
    #[arg(long, value_name = "KEY", help_heading = "Sorting")]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort", help_heading = "Sorting")]
    pub desc: bool,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Show or change configuration
    #[command(display_order = 30)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print one resolved value
    Get { key: String },

    /// Persist a value to the data directory's lendadmin.toml
    Set { key: String, value: String },

    /// Generate a sample lendadmin.toml
    Gen {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
