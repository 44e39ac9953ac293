//! Shell assignment rendering.
//!
//! Each dialect quotes values so that the host shell reads back the exact
//! bytes, whatever the value contains. Names are validated first since they
//! cannot be quoted.

use std::fmt;
use std::str::FromStr;

use crate::core::domain::EnvironmentSet;
use crate::core::validation::validate_name;
use crate::error::{ConfigError, Result};

/// Target syntax for rendered statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// sh, bash, zsh: `export NAME='value'`
    #[default]
    Posix,
    /// fish: `set -gx NAME 'value'`
    Fish,
    /// PowerShell: `$env:NAME = 'value'`
    PowerShell,
    /// dotenv file syntax: `NAME="value"`
    Dotenv,
}

impl FromStr for Dialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "posix" | "sh" | "bash" | "zsh" => Ok(Self::Posix),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" => Ok(Self::PowerShell),
            "dotenv" => Ok(Self::Dotenv),
            _ => Err(ConfigError::InvalidShell(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Posix => "posix",
            Self::Fish => "fish",
            Self::PowerShell => "powershell",
            Self::Dotenv => "dotenv",
        };
        f.write_str(name)
    }
}

/// Render one assignment statement per variable, in set order.
///
/// # Errors
///
/// Returns `ParseError::InvalidName` if any name is not a portable shell
/// identifier. Nothing is rendered in that case.
pub fn render(set: &EnvironmentSet, dialect: Dialect) -> Result<Vec<String>> {
    for name in set.names() {
        validate_name(name)?;
    }

    Ok(set
        .iter()
        .map(|(name, value)| statement(dialect, name, value))
        .collect())
}

/// Format a single assignment. `name` must already be validated.
fn statement(dialect: Dialect, name: &str, value: &str) -> String {
    match dialect {
        Dialect::Posix => format!("export {}={}", name, posix_quote(value)),
        Dialect::Fish => format!("set -gx {} {}", name, fish_quote(value)),
        Dialect::PowerShell => format!("$env:{} = {}", name, powershell_quote(value)),
        Dialect::Dotenv => format!("{}=\"{}\"", name, dotenv_escape(value)),
    }
}

/// Single-quote for POSIX shells. Nothing is special inside single quotes,
/// so the only work is closing, escaping, and reopening around `'`.
pub fn posix_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}

/// Single-quote for fish, where `\\` and `\'` are the only escapes.
pub fn fish_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Single-quote for PowerShell. It also treats the typographic single
/// quotes as delimiters, so those are doubled too.
pub fn powershell_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        if matches!(ch, '\'' | '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}') {
            out.push(ch);
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

fn dotenv_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '$' => escaped.push_str("\\$"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
