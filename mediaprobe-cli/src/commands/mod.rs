//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `get` command.
/// This command prints a single property lookup.
pub mod get;

/// Module containing the implementation of the `info` command.
/// This command prints a summary of the parsed media information.
pub mod info;
