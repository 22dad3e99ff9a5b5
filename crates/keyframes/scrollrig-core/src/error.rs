//! Error types for keyframe tables, ramps and scene configuration

use serde::{Deserialize, Serialize};

/// Errors surfaced while building or loading scroll-driven animation data.
///
/// Sampling itself never fails: out-of-range progress is clamped. Every
/// variant here describes configuration that has to be fixed by whoever
/// authored it, so callers usually report it once at startup.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum KeyframeError {
    /// A table, ramp, intro or smoothing block cannot be sampled as configured
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Configuration text was not well-formed
    #[error("Parse error: {reason}")]
    Parse { reason: String },
}

impl KeyframeError {
    /// Create a new configuration error
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Check if this error came from validating configuration values
    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Short category name for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { .. } => "configuration",
            Self::Parse { .. } => "parse",
        }
    }
}

impl From<serde_json::Error> for KeyframeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
