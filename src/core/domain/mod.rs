//! Domain types.

mod env;
mod request;

pub use env::EnvironmentSet;
pub use request::{DecryptionRequest, EncryptedFile};
