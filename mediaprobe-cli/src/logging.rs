// ============================================================================
// mediaprobe-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger Setup for the CLI
//
// Log records go to stderr so that stdout only carries command output.
// RUST_LOG takes precedence over the --verbose flag:
// - default: warnings and errors (lenient parse diagnostics included)
// - --verbose: debug output from mediaprobe-core as well
//
// AI-ASSISTANT-INFO: Logger initialization for the CLI

use std::io::Write;

use env_logger::Env;
use log::{Level, debug};
use owo_colors::{OwoColorize, Stream};

use crate::config::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

/// Initialize the logger for mediaprobe
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            let level_str = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN ",
                Level::Info => "INFO ",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };

            let level_colored = level_str.if_supports_color(Stream::Stderr, |text| match record.level() {
                Level::Error => text.bright_red().to_string(),
                Level::Warn => text.yellow().to_string(),
                Level::Info => text.green().to_string(),
                Level::Debug => text.blue().to_string(),
                Level::Trace => text.magenta().to_string(),
            });

            writeln!(buf, "{} {} {}", buf.timestamp(), level_colored, record.args())
        })
        .init();

    debug!("Logger initialized with default filter: {}", default_filter);
}
