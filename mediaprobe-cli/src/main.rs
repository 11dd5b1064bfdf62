// mediaprobe-cli/src/main.rs
//
// Entry point for the `mediaprobe` binary: parses arguments, sets up
// logging, runs the selected command and maps failures to exit code 1.

use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use std::process;

use mediaprobe_cli::{Cli, Commands, logging, run_get, run_info};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match &cli.command {
        Commands::Info(args) => run_info(args),
        Commands::Get(args) => run_get(args),
    };

    if let Err(e) = result {
        eprintln!(
            "{} {:#}",
            "Error:".if_supports_color(Stream::Stderr, |t| t.bright_red()),
            e
        );
        process::exit(1);
    }
}
