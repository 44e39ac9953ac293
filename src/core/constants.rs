//! Constants used throughout hush.
//!
//! Centralizes file names, environment variable names, and defaults.

/// Encrypted environment file name, looked up in the working directory.
pub const ENCRYPTED_FILE: &str = ".env.enc";

/// Default provider timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Config file location relative to the platform config dir.
pub const CONFIG_FILE: &str = "hush/config.toml";

/// Overrides the config file location.
pub const ENV_CONFIG: &str = "HUSH_CONFIG";

/// Path to the provider's key material.
pub const ENV_KEY_FILE: &str = "HUSH_KEY_FILE";

/// Provider selection (`age`, `sops`, `command`).
pub const ENV_PROVIDER: &str = "HUSH_PROVIDER";

/// Provider timeout in seconds.
pub const ENV_TIMEOUT: &str = "HUSH_TIMEOUT";

/// Encrypted file name override.
pub const ENV_FILE: &str = "HUSH_FILE";

/// Log filter directive.
pub const ENV_LOG: &str = "HUSH_LOG";

/// Placeholder for the encrypted file path in custom provider args.
pub const ARG_FILE: &str = "{file}";

/// Placeholder for the key file path in custom provider args.
pub const ARG_KEY: &str = "{key}";
