//! Error types.
//!
//! One top-level [`Error`] wraps a nested enum per concern so callers can
//! branch on the failure class (missing file, decryption, content shape).

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a missing encrypted file.
pub const EXIT_NOT_FOUND: i32 = 3;
/// Exit code for any provider failure.
pub const EXIT_DECRYPTION: i32 = 4;
/// Exit code for malformed decrypted content.
pub const EXIT_MALFORMED: i32 = 5;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Decrypt(#[from] DecryptError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Locating the encrypted file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no encrypted file found at {}", path.display())]
    NotFound { path: PathBuf },
}

/// Failures of the external decryption provider.
#[derive(Error, Debug)]
pub enum DecryptError {
    #[error("decryption failed ({status}): {stderr}")]
    Failed { status: String, stderr: String },

    #[error("decryption timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("decryption provider not installed: {program}")]
    NotInstalled { program: String },

    #[error("failed to run decryption provider: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("provider '{provider}' needs a key file (set HUSH_KEY_FILE)")]
    MissingKey { provider: String },
}

/// Problems with the decrypted plaintext.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed line {line}: {content:?}")]
    Malformed { line: usize, content: String },

    #[error("invalid variable name: {0:?}")]
    InvalidName(String),

    #[error("decrypted output is not valid UTF-8 (line {line})")]
    Encoding { line: usize },
}

/// Configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown provider '{0}' (expected age, sops or command)")]
    InvalidProvider(String),

    #[error("invalid timeout '{0}': must be a positive number of seconds")]
    InvalidTimeout(String),

    #[error("unknown shell '{0}' (expected posix, fish, powershell or dotenv)")]
    InvalidShell(String),

    #[error("provider 'command' requires a program")]
    MissingProgram,

    #[error("unable to determine home directory")]
    NoHome,
}

impl Error {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Load(LoadError::NotFound { .. }) => EXIT_NOT_FOUND,
            Error::Decrypt(_) => EXIT_DECRYPTION,
            Error::Parse(_) => EXIT_MALFORMED,
            _ => 1,
        }
    }

    /// Whether a caller can continue without secrets.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Load(LoadError::NotFound { .. }))
    }

    /// Suggestion printed under the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Load(_) => Some("pass --allow-missing to continue without secrets"),
            Error::Decrypt(DecryptError::NotInstalled { .. }) => {
                Some("install the provider or set HUSH_PROVIDER")
            }
            Error::Decrypt(DecryptError::MissingKey { .. }) => {
                Some("export HUSH_KEY_FILE=<path to your private key>")
            }
            Error::Decrypt(DecryptError::Failed { .. }) => {
                Some("check that HUSH_KEY_FILE points at the matching private key")
            }
            Error::Decrypt(DecryptError::Timeout { .. }) => Some("raise the limit with --timeout"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
