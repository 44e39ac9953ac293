//! Decryption providers.
//!
//! The loader never decrypts anything itself. It hands a
//! [`DecryptionRequest`] to a [`Decrypt`] implementation and gets plaintext
//! bytes back. The real implementation shells out to an external program;
//! tests substitute their own.
//!
//! ## Adding a New Provider
//!
//! 1. Implement the `Decrypt` trait
//! 2. Map its failures onto `DecryptError`
//! 3. Pass it to `Loader::new`

use zeroize::Zeroizing;

use crate::core::domain::DecryptionRequest;
use crate::error::Result;

mod command;

pub use command::CommandProvider;

/// Decryption capability.
pub trait Decrypt {
    /// Decrypt the requested file.
    ///
    /// # Returns
    ///
    /// The plaintext bytes, wiped from memory when dropped.
    ///
    /// # Errors
    ///
    /// Returns `DecryptError` if the provider fails, times out, or is not
    /// available.
    fn decrypt(&self, request: &DecryptionRequest<'_>) -> Result<Zeroizing<Vec<u8>>>;

    /// Provider name for diagnostics.
    fn name(&self) -> &str;
}

impl<T: Decrypt + ?Sized> Decrypt for &T {
    fn decrypt(&self, request: &DecryptionRequest<'_>) -> Result<Zeroizing<Vec<u8>>> {
        (**self).decrypt(request)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Decrypt + ?Sized> Decrypt for Box<T> {
    fn decrypt(&self, request: &DecryptionRequest<'_>) -> Result<Zeroizing<Vec<u8>>> {
        (**self).decrypt(request)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
