//! Encrypted file and decryption request types.

use std::path::{Path, PathBuf};

/// A ciphertext artifact on disk, read-only to the loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedFile {
    path: PathBuf,
}

impl EncryptedFile {
    /// Locate `name` directly inside `dir`
    pub fn locate(dir: &Path, name: &str) -> Self {
        Self {
            path: dir.join(name),
        }
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file is present
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Input to a single provider call. Built per invocation, never stored.
#[derive(Debug, Clone)]
pub struct DecryptionRequest<'a> {
    pub file: &'a EncryptedFile,
    pub key_ref: Option<&'a Path>,
}

impl<'a> DecryptionRequest<'a> {
    pub fn new(file: &'a EncryptedFile, key_ref: Option<&'a Path>) -> Self {
        Self { file, key_ref }
    }
}
