//! Configuration management module.
//!
//! This module handles the typed plugin settings and the TOML configuration
//! file the replay binary runs from.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: Logging verbosity (`off`, `trace`, `debug`, `info`, `warn`, `error`)
//! - **plugin**: The leecher settings (thresholds, message templates, ban flag,
//!   detected leechers)
//!
//! # Features
//!
//! - TOML file parsing with detailed error messages
//! - Default value generation for a first run
//! - Threshold clamping to the enforced minimums
//! - Schema descriptors so a host can render a settings form
//!
//! # Example
//!
//! ```rust,ignore
//! use leecher_tracker::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one if requested
//! let config = Configuration::load_from_file("config.toml", false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! default_config.save("config.toml")?;
//! ```

/// Configuration enumerations (errors, setting kinds).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving and settings helpers.
pub mod impls;
