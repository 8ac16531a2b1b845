//! Core shared library for the LogLine wall-clock tooling.
//!
//! This crate exposes the reusable pieces the value type and the CLI
//! depend on: the canonical error type, configuration loading, JSON
//! helpers and logging setup.

pub mod config;
pub mod errors;
pub mod logging;
pub mod serde_utils;

pub use config::{Environment, WallTimeConfig};
pub use errors::LogLineError;
