//! Output formatting utilities for consistent CLI presentation.
//!
//! Errors go to stderr so they never mix with forwarded git output; plain
//! informational notes go to stdout.

use colored::Colorize;

/// Formats and prints an error message to stderr
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}
