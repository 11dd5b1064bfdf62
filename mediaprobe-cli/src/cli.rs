// mediaprobe-cli/src/cli.rs
//
// Command-line argument definitions for the `mediaprobe` binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Mediaprobe: inspect ffprobe JSON output",
    long_about = "Reads the JSON printed by `ffprobe -print_format json -show_format \
                  -show_streams -show_chapters` and shows the media information in it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a summary of format, streams and chapters
    Info(InfoArgs),
    /// Look up a single property
    Get(GetArgs),
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// File containing ffprobe JSON output, or '-' for stdin
    #[arg(required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// Report malformed input as "no media information" instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Pretty-print the parsed document instead of a summary
    #[arg(long)]
    pub raw: bool,

    /// Omit the streams section
    #[arg(long)]
    pub no_streams: bool,

    /// Omit the chapters section
    #[arg(long)]
    pub no_chapters: bool,

    /// Omit tags
    #[arg(long)]
    pub no_tags: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// File containing ffprobe JSON output, or '-' for stdin
    #[arg(required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// Property key, e.g. "duration"
    #[arg(required = true, value_name = "KEY")]
    pub key: String,

    /// Which part of the document to look in
    #[arg(long, value_enum, default_value_t = Scope::Format)]
    pub scope: Scope,

    /// How to convert the value
    #[arg(long = "as", value_enum, default_value_t = ValueKind::Text)]
    pub kind: ValueKind,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The "format" object
    Format,
    /// The whole document
    All,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
    Raw,
}
