//! Configuration module for sidediff.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use sidediff::config::{AppConfig, ConfigPreset};
//! use sidediff::diff::InlineGranularity;
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Precise);
//! assert_eq!(config.engine.granularity, InlineGranularity::Char);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .granularity(InlineGranularity::Char)
//!     .context(Some(3))
//!     .fail_on_change(true)
//!     .build();
//! ```
//!
//! # Configuration File
//!
//! Place a `.sidediff.yaml` file in your project root or `~/.config/sidediff/`:
//!
//! ```yaml
//! engine:
//!   granularity: char
//! output:
//!   format: side-by-side
//!   context: 3
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{ConfigPreset, DEFAULT_CONTEXT_LINES};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, DiffConfig, DiffConfigBuilder, DiffPaths,
    EngineConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, user_config_dir, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.sidediff.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        let properties = &value["properties"];
        assert!(properties.get("engine").is_some());
        assert!(properties.get("output").is_some());
        assert!(properties.get("behavior").is_some());
    }
}
