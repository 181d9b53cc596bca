//! Resolution of CLI settings.
//!
//! Values are taken, in order of precedence, from explicit command-line flags,
//! `-S key=value` overrides, the TOML config file, and finally the built-in defaults.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::build_config;
pub use models::{AppConfig, OutputConfig, OutputFormat};
