//! Configuration loading.
//!
//! Settings are layered, lowest precedence first: built-in defaults, the
//! optional TOML config file, `HUSH_*` environment variables, then explicit
//! overrides from the command line. Everything is read at invocation time.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

use crate::core::constants;
use crate::core::render::Dialect;
use crate::error::{ConfigError, Result};

/// Which external program decrypts the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    /// `age --decrypt --identity <key> <file>`
    #[default]
    Age,
    /// `sops --decrypt` with dotenv input/output
    Sops,
    /// Any program, with `{file}` and `{key}` placeholders in its args
    Command,
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "age" => Ok(Self::Age),
            "sops" => Ok(Self::Sops),
            "command" => Ok(Self::Command),
            _ => Err(ConfigError::InvalidProvider(s.to_string())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Age => "age",
            Self::Sops => "sops",
            Self::Command => "command",
        };
        f.write_str(name)
    }
}

/// On-disk config file (`~/.config/hush/config.toml`)
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Encrypted file name
    pub file: Option<String>,
    /// Provider name
    pub provider: Option<String>,
    /// Provider program path or name
    pub program: Option<String>,
    /// Provider arguments (custom command provider)
    pub args: Option<Vec<String>>,
    /// Path to key material
    pub key_file: Option<String>,
    /// Provider timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Default shell dialect
    pub shell: Option<String>,
}

impl FileConfig {
    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents).map_err(ConfigError::Parse)?)
    }

    /// Read the config file if it exists
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file exists but can't be read, or
    /// `ConfigError::Parse` if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Ok(None);
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map(Some)
    }
}

/// Explicit overrides, typically from command-line flags
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub file: Option<String>,
    pub provider: Option<String>,
    pub key_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub shell: Option<Dialect>,
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    /// Encrypted file name inside the working directory
    pub file: String,
    /// Provider kind
    pub provider: Provider,
    /// Program override (required for `Provider::Command`)
    pub program: Option<String>,
    /// Extra arguments for `Provider::Command`
    pub args: Vec<String>,
    /// Key material reference handed to the provider
    pub key_file: Option<PathBuf>,
    /// Upper bound on the provider's run time
    pub timeout: Duration,
    /// Default render dialect
    pub shell: Dialect,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file: constants::ENCRYPTED_FILE.to_string(),
            provider: Provider::default(),
            program: None,
            args: Vec::new(),
            key_file: None,
            timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
            shell: Dialect::default(),
        }
    }
}

impl Settings {
    /// Resolve settings from the real config file and process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unreadable or invalid configuration.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let path = config_path()?;
        let file = FileConfig::load(&path)?;
        Self::resolve(file, |name| std::env::var(name).ok(), overrides)
    }

    /// Layer the sources over the defaults.
    ///
    /// `env` looks up an environment variable by name, so tests can supply
    /// their own environment.
    pub fn resolve<F>(file: Option<FileConfig>, env: F, overrides: &Overrides) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        let env = |name: &str| env(name).filter(|v| !v.is_empty());

        if let Some(file) = file {
            if let Some(name) = file.file {
                settings.file = name;
            }
            if let Some(provider) = file.provider {
                settings.provider = provider.parse()?;
            }
            settings.program = file.program;
            if let Some(args) = file.args {
                settings.args = args;
            }
            if let Some(key) = file.key_file {
                settings.key_file = Some(expand_home(&key)?);
            }
            if let Some(secs) = file.timeout_secs {
                settings.timeout = timeout(secs, &secs.to_string())?;
            }
            if let Some(shell) = file.shell {
                settings.shell = shell.parse()?;
            }
        }

        if let Some(name) = env(constants::ENV_FILE) {
            settings.file = name;
        }
        if let Some(provider) = env(constants::ENV_PROVIDER) {
            settings.provider = provider.parse()?;
        }
        if let Some(key) = env(constants::ENV_KEY_FILE) {
            settings.key_file = Some(expand_home(&key)?);
        }
        if let Some(raw) = env(constants::ENV_TIMEOUT) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            settings.timeout = timeout(secs, &raw)?;
        }

        if let Some(name) = &overrides.file {
            settings.file = name.clone();
        }
        if let Some(provider) = &overrides.provider {
            settings.provider = provider.parse()?;
        }
        if let Some(key) = &overrides.key_file {
            settings.key_file = Some(key.clone());
        }
        if let Some(secs) = overrides.timeout_secs {
            settings.timeout = timeout(secs, &secs.to_string())?;
        }
        if let Some(shell) = overrides.shell {
            settings.shell = shell;
        }

        if settings.provider == Provider::Command && settings.program.is_none() {
            return Err(ConfigError::MissingProgram.into());
        }

        debug!(
            file = %settings.file,
            provider = %settings.provider,
            timeout_secs = settings.timeout.as_secs(),
            has_key = settings.key_file.is_some(),
            "settings resolved"
        );

        Ok(settings)
    }
}

/// Location of the config file: `$HUSH_CONFIG`, else the platform config dir.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(constants::ENV_CONFIG).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let dir = dirs::config_dir().ok_or(ConfigError::NoHome)?;
    Ok(dir.join(constants::CONFIG_FILE))
}

fn timeout(secs: u64, raw: &str) -> Result<Duration> {
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout(raw.to_string()).into());
    }
    Ok(Duration::from_secs(secs))
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir().ok_or(ConfigError::NoHome)?;
            Ok(home.join(rest))
        }
        None if path == "~" => Ok(dirs::home_dir().ok_or(ConfigError::NoHome)?),
        None => Ok(PathBuf::from(path)),
    }
}
