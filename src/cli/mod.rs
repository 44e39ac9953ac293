//! Command-line interface.
//!
//! A thin adapter over [`crate::core`]: it resolves settings, calls the
//! loader, and owns every side effect (stdout, exit codes, child processes).

pub mod completions;
pub mod hook;
pub mod keys;
pub mod load;
pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::{Overrides, Settings};
use crate::core::render::Dialect;
use crate::error::Result;

/// hush - load encrypted environment files into your shell.
#[derive(Parser)]
#[command(
    name = "hush",
    about = "Load encrypted environment files into your shell",
    version,
    after_help = "Add `eval \"$(hush hook bash)\"` to your shell profile, then run `hush_load`."
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub opts: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command that loads secrets.
#[derive(Args, Debug, Default)]
pub struct GlobalOpts {
    /// Directory holding the encrypted file (default: current directory)
    #[arg(short = 'C', long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Encrypted file name (default: .env.enc)
    #[arg(short, long, global = true, value_name = "NAME")]
    pub file: Option<String>,

    /// Key file handed to the provider (overrides HUSH_KEY_FILE)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub key_file: Option<PathBuf>,

    /// Decryption provider: age, sops, or command
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Seconds to wait for the provider before giving up
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print shell assignments for the decrypted variables
    Load {
        /// Output syntax
        #[arg(short, long, value_enum)]
        shell: Option<ShellSyntax>,
        /// Exit 0 with a notice when there is no encrypted file
        #[arg(long)]
        allow_missing: bool,
    },

    /// List variable names (never values)
    Keys {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a command with the decrypted variables in its environment
    Run {
        /// Run the command without secrets when there is no encrypted file
        #[arg(long)]
        allow_missing: bool,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Print a shell function that wraps `hush load`
    Hook {
        /// Shell to generate the wrapper for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported interactive shells.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Output syntax for `hush load`.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ShellSyntax {
    Posix,
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Dotenv,
}

impl From<ShellSyntax> for Dialect {
    fn from(shell: ShellSyntax) -> Self {
        match shell {
            ShellSyntax::Posix | ShellSyntax::Bash | ShellSyntax::Zsh => Dialect::Posix,
            ShellSyntax::Fish => Dialect::Fish,
            ShellSyntax::PowerShell => Dialect::PowerShell,
            ShellSyntax::Dotenv => Dialect::Dotenv,
        }
    }
}

impl GlobalOpts {
    /// Resolve settings with these options as the top layer
    pub fn settings(&self, shell: Option<Dialect>) -> Result<Settings> {
        let overrides = Overrides {
            file: self.file.clone(),
            provider: self.provider.clone(),
            key_file: self.key_file.clone(),
            timeout_secs: self.timeout,
            shell,
        };
        Settings::load(&overrides)
    }

    /// Working directory to look in
    pub fn dir(&self) -> Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// Execute a command.
pub fn execute(command: Command, opts: &GlobalOpts) -> Result<()> {
    use Command::*;

    match command {
        Load {
            shell,
            allow_missing,
        } => load::execute(opts, shell.map(Dialect::from), allow_missing),
        Keys { json } => keys::execute(opts, json),
        Run {
            allow_missing,
            command,
        } => run::execute(opts, &command, allow_missing),
        Hook { shell } => hook::execute(shell),
        Completions { shell } => completions::execute(shell),
    }
}
