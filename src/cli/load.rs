//! Load command.
//!
//! Prints assignment statements for the calling shell to evaluate.

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::GlobalOpts;
use crate::core::loader;
use crate::core::render::{render, Dialect};
use crate::error::Result;

/// Decrypt, render, and write the statements to stdout.
pub fn execute(opts: &GlobalOpts, shell: Option<Dialect>, allow_missing: bool) -> Result<()> {
    let settings = opts.settings(shell)?;
    let dir = opts.dir()?;

    let set = match loader::load(&dir, &settings) {
        Ok(set) => set,
        Err(e) if allow_missing && e.is_not_found() => {
            output::notice(&format!("{}, skipping", e));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let statements = Zeroizing::new(render(&set, settings.shell)?);
    debug!(statements = statements.len(), dialect = %settings.shell, "rendered");

    output::lines(statements.iter())?;
    Ok(())
}
