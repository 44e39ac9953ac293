//! Keys command.
//!
//! Lists the variable names in the encrypted file without printing values.

use crate::cli::output;
use crate::cli::GlobalOpts;
use crate::core::loader;
use crate::error::{Error, Result};

/// Print variable names, one per line or as a JSON array.
pub fn execute(opts: &GlobalOpts, json: bool) -> Result<()> {
    let settings = opts.settings(None)?;
    let set = loader::load(&opts.dir()?, &settings)?;
    let names: Vec<&str> = set.names().collect();

    if json {
        let encoded = serde_json::to_string_pretty(&names)
            .map_err(|e| Error::Other(format!("json encoding failed: {}", e)))?;
        output::lines([encoded])?;
    } else {
        output::lines(names)?;
    }

    Ok(())
}
