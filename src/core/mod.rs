//! Core library components.
//!
//! Everything here is free of terminal side effects: loading returns an
//! [`domain::EnvironmentSet`] and rendering returns strings. The CLI decides
//! what to print and how to exit.

pub mod config;
pub mod constants;
pub mod domain;
pub mod loader;
pub mod parse;
pub mod provider;
pub mod render;
pub mod validation;
