//! Command-line argument definitions for the state flight statistics CLI
//!
//! This module defines the CLI interface using the clap derive API. Each
//! subcommand maps onto one query of the state query service.

use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the state flight statistics tool
///
/// Loads a flight dataset, resolves every source and destination city to an
/// Indian state or union territory and reports per-state flight statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "state-flight-stats",
    version,
    about = "Per-state flight statistics for Indian domestic flight datasets",
    long_about = "Loads a CSV of domestic flight records, resolves source and destination cities \
                  to Indian states and union territories, and reports incoming and outgoing \
                  flight counts, unique routes and serving airlines for each state."
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct GlobalArgs {
    /// Flight dataset CSV (overrides config and environment)
    #[arg(
        short = 'd',
        long = "dataset",
        value_name = "FILE",
        global = true,
        help = "Flight dataset CSV file"
    )]
    pub dataset: Option<PathBuf>,

    /// State-to-cities JSON table (overrides config and environment)
    #[arg(
        long = "city-map",
        value_name = "FILE",
        global = true,
        help = "City-to-state mapping JSON file"
    )]
    pub city_map: Option<PathBuf>,

    /// Configuration file
    ///
    /// Defaults to <config dir>/state-flight-stats/config.json when present.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Configuration file path"
    )]
    pub config_file: Option<PathBuf>,

    /// Require source and destination columns in the dataset header
    #[arg(long = "strict-header", global = true)]
    pub strict_header: bool,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Table,
        global = true,
        help = "Output format"
    )]
    pub format: OutputFormat,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress progress output and log only errors"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List every state with its total flights
    States,
    /// Show the detail view of one state
    State(StateArgs),
    /// Show the airlines serving a state, most flights first
    Airlines(AirlinesArgs),
    /// Dump full aggregations for one state or all states with data
    Aggregations(AggregationsArgs),
    /// Resolve city names to states
    Resolve(ResolveArgs),
    /// Report how many flight ends resolved to a state
    Coverage(CoverageArgs),
    /// Print a liveness summary
    Health,
}

/// Arguments for the state command
#[derive(Debug, Clone, Parser)]
pub struct StateArgs {
    /// State name or slug, e.g. "tamil-nadu"
    #[arg(value_name = "STATE")]
    pub state: String,
}

/// Arguments for the airlines command
#[derive(Debug, Clone, Parser)]
pub struct AirlinesArgs {
    /// State name or slug
    #[arg(value_name = "STATE")]
    pub state: String,

    /// Maximum number of airlines to list (defaults to the configured limit)
    #[arg(short = 'n', long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

/// Arguments for the aggregations command
#[derive(Debug, Clone, Parser)]
pub struct AggregationsArgs {
    /// Only this state
    #[arg(short = 's', long = "state", value_name = "STATE")]
    pub state: Option<String>,
}

/// Arguments for the resolve command
#[derive(Debug, Clone, Parser)]
pub struct ResolveArgs {
    /// City names to resolve
    #[arg(value_name = "CITY", required = true)]
    pub cities: Vec<String>,
}

/// Arguments for the coverage command
#[derive(Debug, Clone, Parser)]
pub struct CoverageArgs {
    /// Number of unresolved cities to list
    #[arg(long = "top", value_name = "N", default_value_t = 20)]
    pub top: usize,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl GlobalArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress spinners (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the global arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state_with_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "state-flight-stats",
            "state",
            "tamil-nadu",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.global.format, OutputFormat::Json);
        assert_eq!(args.global.verbose, 2);
        match args.get_command() {
            Some(Commands::State(state_args)) => assert_eq!(state_args.state, "tamil-nadu"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_airlines_limit() {
        let args = Args::try_parse_from(["state-flight-stats", "airlines", "Kerala", "-n", "3"])
            .unwrap();

        match args.get_command() {
            Some(Commands::Airlines(airlines)) => {
                assert_eq!(airlines.state, "Kerala");
                assert_eq!(airlines.limit, Some(3));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_requires_a_city() {
        assert!(Args::try_parse_from(["state-flight-stats", "resolve"]).is_err());

        let args =
            Args::try_parse_from(["state-flight-stats", "resolve", "Bombay", "Madras"]).unwrap();
        match args.get_command() {
            Some(Commands::Resolve(resolve)) => assert_eq!(resolve.cities.len(), 2),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_log_level_selection() {
        let mut global = GlobalArgs::default();
        assert_eq!(global.get_log_level(), "warn");

        global.verbose = 1;
        assert_eq!(global.get_log_level(), "info");

        global.verbose = 5;
        assert_eq!(global.get_log_level(), "trace");

        global.quiet = true;
        assert_eq!(global.get_log_level(), "error");
        assert!(!global.show_progress());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["state-flight-stats", "states", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_missing_config_file_fails_validation() {
        let global = GlobalArgs {
            config_file: Some(PathBuf::from("/nonexistent/config.json")),
            ..GlobalArgs::default()
        };
        assert!(global.validate().is_err());
    }

    #[test]
    fn test_no_subcommand_parses() {
        let args = Args::try_parse_from(["state-flight-stats"]).unwrap();
        assert!(args.get_command().is_none());
        assert_eq!(args.global.format, OutputFormat::Table);
    }
}
