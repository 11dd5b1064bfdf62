// mediaprobe-cli/src/output.rs
//
// Printing helpers shared by the commands. Colors are only used when
// stdout supports them.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

use crate::config::NOT_PRESENT;

/// Print a heading with clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(50);

    println!("{}", line.if_supports_color(Stream::Stdout, |t| t.bright_blue()));
    println!("{}", text.if_supports_color(Stream::Stdout, |t| t.bold()));
    println!("{}", line.if_supports_color(Stream::Stdout, |t| t.bright_blue()));
}

/// Print a section heading (smaller than main heading)
pub fn print_section(text: &str) {
    let line = "-".repeat(40);

    println!();
    println!("{}", text.if_supports_color(Stream::Stdout, |t| t.bold()));
    println!("{}", line.if_supports_color(Stream::Stdout, |t| t.blue()));
}

/// Print a label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!(
        "{}: {}",
        label.if_supports_color(Stream::Stdout, |t| t.bright_cyan()),
        value
    );
}

/// Like `print_info`, but prints a placeholder for missing values
pub fn print_optional<T: Display>(label: &str, value: Option<T>) {
    match value {
        Some(value) => print_info(label, value),
        None => print_info(label, NOT_PRESENT),
    }
}

/// Print a warning line
pub fn print_warning(text: &str) {
    println!("{}", text.if_supports_color(Stream::Stdout, |t| t.yellow()));
}
