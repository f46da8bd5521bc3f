//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a declaration macro for
//! creating machine configurations with minimal boilerplate, validating
//! the table before a machine ever runs on it.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;
