//! Colored console output.
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print informational message (blue) to stdout
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().blue());
}

/// Print success message (green) to stdout
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().green());
}

/// Print warning (bold yellow) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", msg.to_string().yellow().bold());
}

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}
