use crate::core::layout::PackingStrategy;
use crate::export::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimelane
#[derive(Parser)]
#[command(
    name = "rtimelane",
    version = env!("CARGO_PKG_VERSION"),
    about = "Lay out a day's reservation bookings on non-overlapping timeline rows",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Disable colored output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Pack the bookings of a file into timeline rows
    Layout {
        /// Bookings file (.json, .csv, .yaml or .yml)
        file: String,

        #[arg(long, help = "Minutes of separation required between bars in one row")]
        buffer: Option<u32>,

        #[arg(long, value_name = "HH:MM", help = "Visible window start")]
        start: Option<String>,

        #[arg(long, value_name = "HH:MM", help = "Visible window end (24:00 allowed)")]
        end: Option<String>,

        #[arg(long, value_enum, help = "Row search strategy")]
        strategy: Option<PackingStrategy>,

        #[arg(long, help = "Draw an ASCII lane chart below the table")]
        chart: bool,

        #[arg(
            long,
            value_name = "HH:MM",
            requires = "chart",
            help = "Mark this time on the chart (needs --chart)"
        )]
        now: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        #[arg(long, short = 'o', value_name = "FILE", help = "Write json/csv output to a file")]
        out: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Show where the current-time marker sits on the timeline
    Now {
        #[arg(long, value_name = "TIME", help = "Use this time instead of the clock")]
        at: Option<String>,

        #[arg(long, value_name = "HH:MM")]
        start: Option<String>,

        #[arg(long, value_name = "HH:MM")]
        end: Option<String>,
    },
}
