// mediaprobe-cli/src/config.rs
//
// Default configuration constants for the `mediaprobe` binary and the
// per-run display settings derived from command-line arguments.

use crate::cli::InfoArgs;

/// Input path that means "read from stdin"
pub const STDIN_PATH: &str = "-";

/// Placeholder printed for lookups that resolve to nothing
pub const NOT_PRESENT: &str = "<not present>";

/// Log filter used when neither RUST_LOG nor --verbose is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used with --verbose
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// What the `info` command prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoConfig {
    pub lenient: bool,
    pub raw: bool,
    pub show_streams: bool,
    pub show_chapters: bool,
    pub show_tags: bool,
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            lenient: false,
            raw: false,
            show_streams: true,
            show_chapters: true,
            show_tags: true,
        }
    }
}

impl From<&InfoArgs> for InfoConfig {
    fn from(args: &InfoArgs) -> Self {
        Self {
            lenient: args.lenient,
            raw: args.raw,
            show_streams: !args.no_streams,
            show_chapters: !args.no_chapters,
            show_tags: !args.no_tags,
        }
    }
}
