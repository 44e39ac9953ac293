//! Run command.
//!
//! Executes a command with decrypted variables injected as environment
//! variables, so nothing passes through the shell at all.

use crate::cli::output;
use crate::cli::GlobalOpts;
use crate::core::domain::EnvironmentSet;
use crate::core::loader;
use crate::error::{Error, Result};

/// Run a command with secrets injected as environment variables.
pub fn execute(opts: &GlobalOpts, command: &[String], allow_missing: bool) -> Result<()> {
    let exit_code = run_with_secrets(opts, command, allow_missing)?;
    std::process::exit(exit_code);
}

/// Load, spawn, and wait. The set is dropped (and wiped) before returning.
fn run_with_secrets(opts: &GlobalOpts, command: &[String], allow_missing: bool) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        return Err(Error::Other("no command specified".to_string()));
    };

    let settings = opts.settings(None)?;
    let set = match loader::load(&opts.dir()?, &settings) {
        Ok(set) => set,
        Err(e) if allow_missing && e.is_not_found() => {
            output::notice(&format!("{}, running without secrets", e));
            EnvironmentSet::new()
        }
        Err(e) => return Err(e),
    };

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);
    for (name, value) in set.iter() {
        cmd.env(name, value);
    }

    let status = cmd
        .status()
        .map_err(|e| Error::Other(format!("failed to run {}: {}", program, e)))?;

    // Signal-terminated children have no code
    Ok(status.code().unwrap_or(1))
}
