//! Configuration validation for sidediff.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::*;

/// Narrowest side-by-side output that still leaves room for both columns.
const MIN_OUTPUT_WIDTH: usize = 20;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.engine.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for EngineConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let limits = [
            ("engine.max_input_bytes", self.max_input_bytes),
            ("engine.max_table_cells", self.max_table_cells),
            ("engine.max_inline_tokens", self.max_inline_tokens),
        ];

        limits
            .into_iter()
            .filter(|(_, value)| *value == 0)
            .map(|(field, _)| ConfigError::new(field, "Limit must be at least 1"))
            .collect()
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        if let Some(width) = self.width {
            if width < MIN_OUTPUT_WIDTH {
                errors.push(ConfigError::new(
                    "output.width",
                    format!("Width must be at least {MIN_OUTPUT_WIDTH} columns, got {width}"),
                ));
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Only boolean flags
        Vec::new()
    }
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !self.paths.left.exists() {
            errors.push(ConfigError::new(
                "paths.left",
                format!("File not found: {}", self.paths.left.display()),
            ));
        }
        if !self.paths.right.exists() {
            errors.push(ConfigError::new(
                "paths.right",
                format!("File not found: {}", self.paths.right.display()),
            ));
        }

        errors.extend(self.engine.validate());
        errors.extend(self.output.validate());
        errors
    }
}

// ============================================================================
// Tests
// ============================================================================
