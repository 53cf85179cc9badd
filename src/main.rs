use anyhow::Context;
use clap::{CommandFactory, Parser};
use state_flight_stats::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // Without a subcommand, show help and exit cleanly
    if args.command.is_none() {
        let mut command = Args::command();
        if let Err(e) = command.print_help() {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        println!();
        process::exit(0);
    }

    match run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    commands::run(args).context("state-flight-stats command failed")
}
