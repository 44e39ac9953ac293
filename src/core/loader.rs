//! Encrypted environment loading.
//!
//! Ties the pieces together: locate the encrypted file, decrypt it through a
//! provider, and parse the plaintext. Each call is independent; nothing is
//! cached and no plaintext touches the disk.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::config::Settings;
use crate::core::domain::{DecryptionRequest, EncryptedFile, EnvironmentSet};
use crate::core::parse::parse;
use crate::core::provider::{CommandProvider, Decrypt};
use crate::error::{LoadError, Result};

/// Loads an [`EnvironmentSet`] from the encrypted file in a directory
pub struct Loader<P> {
    provider: P,
    file_name: String,
    key_file: Option<PathBuf>,
}

impl Loader<CommandProvider> {
    /// Loader backed by the subprocess provider described by `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            CommandProvider::from_settings(settings),
            settings.file.clone(),
            settings.key_file.clone(),
        )
    }
}

impl<P: Decrypt> Loader<P> {
    /// Create a loader around any provider
    pub fn new(provider: P, file_name: impl Into<String>, key_file: Option<PathBuf>) -> Self {
        Self {
            provider,
            file_name: file_name.into(),
            key_file,
        }
    }

    /// The encrypted file this loader would read in `cwd`
    pub fn locate(&self, cwd: &Path) -> EncryptedFile {
        EncryptedFile::locate(cwd, &self.file_name)
    }

    /// Decrypt and parse the encrypted file in `cwd`.
    ///
    /// # Errors
    ///
    /// - `LoadError::NotFound` if there is no encrypted file; the provider is
    ///   not invoked
    /// - `DecryptError` if the provider fails
    /// - `ParseError` if the plaintext is malformed
    pub fn load(&self, cwd: &Path) -> Result<EnvironmentSet> {
        let file = self.locate(cwd);
        debug!(path = %file.path().display(), "looking for encrypted file");

        if !file.exists() {
            return Err(LoadError::NotFound {
                path: file.path().to_path_buf(),
            }
            .into());
        }

        let request = DecryptionRequest::new(&file, self.key_file.as_deref());
        let plaintext = self.provider.decrypt(&request)?;
        let set = parse(&plaintext)?;

        info!(
            variables = set.len(),
            provider = self.provider.name(),
            "environment loaded"
        );
        Ok(set)
    }
}

/// Load the encrypted environment in `cwd` using `settings`.
pub fn load(cwd: &Path, settings: &Settings) -> Result<EnvironmentSet> {
    Loader::from_settings(settings).load(cwd)
}
