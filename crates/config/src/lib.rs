//! Ethconv configuration
use clap::{Parser, Subcommand};

/// Default tracing filter, quiet enough to keep stdout output clean
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Conversion to run
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse a value such as "1.5 ether" into Wei
    Parse {
        /// Value to parse, with an optional unit
        value: String,
        /// Print whole GWei instead of Wei
        #[clap(long)]
        gwei: bool,
    },
    /// Format a number of Wei in a readable unit
    Format {
        /// Amount as a base-10 integer
        amount: String,
        /// Only use Wei, KWei, MWei, GWei or Ether
        #[clap(long)]
        standard: bool,
        /// Treat the amount as GWei rather than Wei
        #[clap(long)]
        from_gwei: bool,
    },
    /// Format a number of Wei as GWei without losing digits
    Gwei {
        /// Amount of Wei as a base-10 integer
        amount: String,
    },
    /// Print the number of Wei in one of a unit
    Multiplier {
        /// Unit name, e.g. "finney" or "gwei"
        unit: String,
    },
}

/// CLI options for ethconv
#[derive(Debug, Clone, Parser)]
#[clap(name = "ethconv", about = "Convert between Ether unit strings and Wei")]
pub struct Opts {
    /// Tracing filter directive, e.g. "debug" or "units=trace"
    #[clap(long, env = "ETHCONV_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Print results as JSON
    #[clap(long, env = "ETHCONV_JSON")]
    pub json: bool,

    /// Conversion to run
    #[clap(subcommand)]
    pub command: Command,
}
