//! Shared CLI output helpers.
//!
//! Stdout is reserved for output meant to be consumed (assignments, key
//! lists), so every status message here goes to stderr.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Yellow: notices
//! - Cyan: hints

use console::style;
use std::io::{self, Write};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ no encrypted file found at ./.env.enc`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a notice to stderr (yellow).
///
/// Example: `⚠ no .env.enc here, continuing without secrets`
pub fn notice(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow().for_stderr(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint to stderr (cyan).
///
/// Example: `→ pass --allow-missing to continue without secrets`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Write lines to stdout, one per line, and flush.
pub fn lines<I, S>(lines: I) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()
}

/// Write raw text to stdout without a trailing newline.
pub fn raw(text: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(text.as_bytes())?;
    out.flush()
}
