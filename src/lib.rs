//! hush - load encrypted environment files into your shell.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── load          # Print shell assignments
//! │   ├── keys          # List variable names
//! │   ├── run           # Run a command with variables injected
//! │   ├── hook          # Shell wrapper functions
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Layered settings
//!     ├── domain/       # EnvironmentSet, EncryptedFile, DecryptionRequest
//!     ├── provider/     # Decrypt trait and subprocess provider
//!     ├── parse         # NAME=VALUE plaintext parsing
//!     ├── render        # Shell quoting per dialect
//!     └── loader        # locate -> decrypt -> parse
//! ```
//!
//! # Library use
//!
//! ```no_run
//! use hush::{load, render, Dialect, Settings};
//!
//! let settings = Settings::load(&Default::default())?;
//! let set = load(std::path::Path::new("."), &settings)?;
//! for line in render(&set, Dialect::Posix)? {
//!     println!("{}", line);
//! }
//! # Ok::<(), hush::error::Error>(())
//! ```
//!
//! Decrypted values only ever live in memory: the set zeroizes them on drop
//! and nothing is written to disk.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::{Overrides, Provider, Settings};
pub use crate::core::domain::{DecryptionRequest, EncryptedFile, EnvironmentSet};
pub use crate::core::loader::{load, Loader};
pub use crate::core::parse::parse;
pub use crate::core::provider::{CommandProvider, Decrypt};
pub use crate::core::render::{render, Dialect};
