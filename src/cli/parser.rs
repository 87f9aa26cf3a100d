use crate::output::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rSolat
/// Prayer times for launchers, cached one year at a time
#[derive(Parser)]
#[command(
    name = "rsolat",
    version = env!("CARGO_PKG_VERSION"),
    about = "Today's prayer times with the current prayer and a countdown to the next",
    long_about = None
)]
pub struct Cli {
    /// Use this config file instead of ~/.rsolat/rsolat.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the configured zone (e.g. WLY01)
    #[arg(global = true, long = "zone")]
    pub zone: Option<String>,

    /// Override the cache directory
    #[arg(global = true, long = "cache-dir", value_name = "DIR")]
    pub cache_dir: Option<String>,

    /// Override the provider endpoint
    #[arg(global = true, long = "provider-url", value_name = "URL")]
    pub provider_url: Option<String>,

    /// Pin the clock ("YYYY-MM-DD HH:MM:SS"), used by tests
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Log more on stderr (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Defaults to `show` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's prayer times
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Alfred)]
        format: OutputFormat,
    },

    /// Download a year's timetable into the cache
    Fetch {
        /// Year to fetch (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// Refetch even if the year is already cached
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Inspect or clear cached timetables
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Write the default configuration file and create the cache directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}

#[derive(Subcommand)]
pub enum CacheAction {
    /// List cached (zone, year) bundles
    List,
    /// Remove cached bundles
    Clear {
        /// Only remove bundles of the configured zone
        #[arg(long = "zone-only")]
        zone_only: bool,
    },
    /// Print the cache directory
    Path,
}
