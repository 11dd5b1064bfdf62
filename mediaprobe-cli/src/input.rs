// mediaprobe-cli/src/input.rs
//
// Reads ffprobe JSON output from a file or from stdin. The bytes are handed
// to the core undecoded so encoding problems surface as parse failures.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::config::STDIN_PATH;

/// Returns true if `path` means "read from stdin"
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Reads the whole input as raw bytes.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if is_stdin(path) {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read probe output from stdin")?;
        return Ok(buffer);
    }

    fs::read(path)
        .with_context(|| format!("Failed to read probe output from '{}'", path.display()))
}
