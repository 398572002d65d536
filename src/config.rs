//! Host-supplied wrap configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::line_break::DEFAULT_WIDTH_EPSILON;

/// Process-wide settings resolved once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapConfig {
    /// Tolerance added to the maximum width before overflow.
    pub width_epsilon: f32,
    /// Whether the HexText extension is installed in the host.
    pub hex_text_present: bool,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            width_epsilon: DEFAULT_WIDTH_EPSILON,
            hex_text_present: false,
        }
    }
}

impl WrapConfig {
    /// Parse and validate a JSON config document. Missing fields take their
    /// defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            log::warn!("rejecting wrap config: {}", err);
            ConfigError::new("config.parse", err.to_string()).with_position(err.line(), err.column())
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable by the breaker.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.width_epsilon.is_finite() || self.width_epsilon < 0.0 {
            log::warn!("rejecting wrap config: width_epsilon={}", self.width_epsilon);
            return Err(ConfigError::new(
                "config.width_epsilon",
                format!(
                    "width_epsilon must be finite and non-negative, got {}",
                    self.width_epsilon
                ),
            ));
        }
        Ok(())
    }
}

/// Structured error for configuration loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    /// Stable machine-readable code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: Box<str>,
    /// Optional 1-based line/column of a parse failure.
    pub position: Option<(usize, usize)>,
}

impl ConfigError {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into().into_boxed_str(),
            position: None,
        }
    }

    fn with_position(mut self, line: usize, column: usize) -> Self {
        if line > 0 {
            self.position = Some((line, column));
        }
        self
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some((line, column)) = self.position {
            write!(f, " [line={} column={}]", line, column)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}
