//! Terminal output helpers.
//!
//! Status lines for every command the runner executes, colored when the
//! stream supports it.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const INFO: &str = "•";
}

/// Banner printed before a command without a title.
pub fn print_running(cmd: &str, cwd: &Path) {
  let line = format!("# Running: {} in {}", cmd, cwd.display());
  println!("{}", line.if_supports_color(Stream::Stdout, |s| s.magenta()));
}

/// Banner printed before a command that was given a title.
pub fn print_title(title: &str) {
  println!("# {}", title);
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}
