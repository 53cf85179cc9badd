//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading, service bootstrap and the
//! output helpers every command uses.

use crate::app::services::FlightStatsServices;
use crate::cli::args::{GlobalArgs, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` wins when set; otherwise the level comes from `-v`/`--quiet`.
pub fn setup_logging(args: &GlobalArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("state_flight_stats={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &GlobalArgs) -> Result<Config> {
    args.validate()?;

    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    match config_file {
        Some(config_path) => info!("Using config file: {}", config_path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &GlobalArgs) {
    if let Some(dataset) = &args.dataset {
        config.dataset_path = dataset.clone();
    }
    if let Some(city_map) = &args.city_map {
        config.city_state_map_path = city_map.clone();
    }
    if args.strict_header {
        config.strict_header = true;
    }
}

/// Build the services, showing a spinner while the dataset loads
pub fn bootstrap_services(config: &Config, args: &GlobalArgs) -> FlightStatsServices {
    let spinner = args.show_progress().then(|| {
        create_spinner(&format!(
            "Loading flights from {}",
            config.dataset_path.display()
        ))
    });

    let services = FlightStatsServices::bootstrap(config);

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    services
}

/// Create a simple spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::json("Failed to serialize output", e))?;
    println!("{}", json);
    Ok(())
}

/// Print `value` as JSON or run `table` to print it for humans
pub fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    table: impl FnOnce(&T),
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => {
            table(value);
            Ok(())
        }
    }
}

/// Section heading
pub fn heading(title: &str) {
    println!("\n{}", title.bright_green().bold());
}

/// Labelled value line
pub fn field(label: &str, value: impl ToString) {
    println!(
        "  {} {}",
        format!("{}:", label).bright_cyan(),
        value.to_string().bright_white()
    );
}

/// Render rows as an aligned table with a coloured header
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = column_widths(headers, rows);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| format!("{:<width$}", header, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header_line.bright_cyan().bold());

    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}

/// Width of each column: the longest of its header and cells
pub fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}
