//! Decrypted plaintext parsing.
//!
//! Turns provider output into an [`EnvironmentSet`]. Parsing is
//! all-or-nothing: the first bad line aborts and nothing is returned.

use tracing::{debug, trace};

use crate::core::domain::EnvironmentSet;
use crate::error::{ParseError, Result};

/// Parse line-oriented `NAME=VALUE` plaintext.
///
/// - Blank and whitespace-only lines are skipped.
/// - Lines whose first non-whitespace character is `#` are comments.
/// - The line is split on the first `=`; VALUE is kept verbatim.
/// - An `export ` prefix before NAME is dropped.
/// - A later duplicate NAME replaces the value but keeps the first position.
///
/// # Errors
///
/// Returns `ParseError::Malformed` for a line without `=`, with an empty
/// name, or with a NUL byte in the value, and `ParseError::Encoding` if the
/// bytes are not UTF-8.
pub fn parse(plaintext: &[u8]) -> Result<EnvironmentSet> {
    trace!(plaintext_len = plaintext.len(), "parsing plaintext");

    let mut set = EnvironmentSet::new();

    for (idx, raw) in plaintext.split(|&b| b == b'\n').enumerate() {
        let line_no = idx + 1;
        let line = std::str::from_utf8(raw).map_err(|_| ParseError::Encoding { line: line_no })?;
        let line = line.strip_suffix('\r').unwrap_or(line);

        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (name, value) = split_line(line)
            .filter(|(_, value)| !value.contains('\0'))
            .ok_or_else(|| ParseError::Malformed {
                line: line_no,
                content: line.to_string(),
            })?;

        set.insert(name, value);
    }

    debug!(variables = set.len(), "parsed plaintext");
    Ok(set)
}

/// Split a non-comment line into name and value.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once('=')?;

    let name = name.trim();
    let name = name
        .strip_prefix("export")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(str::trim_start)
        .unwrap_or(name);

    if name.is_empty() || name.starts_with('#') {
        return None;
    }

    Some((name, value))
}
