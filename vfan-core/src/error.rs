//! Error types for the virtual fan device

use thiserror::Error;

use crate::types::{Attribute, SignalKind};

/// Core error type for virtual fan operations
#[derive(Error, Debug)]
pub enum VfanError {
    /// Channel index outside the configured channel count
    #[error("Channel out of range: {channel} (must be 0-{max})", max = channels - 1)]
    ChannelOutOfRange { channel: usize, channels: usize },

    /// Value outside its declared domain, or a write to a combination
    /// that does not accept writes
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Read of a (kind, attribute) combination that does not exist
    #[error("Unsupported attribute: {kind:?} {attribute:?}")]
    Unsupported {
        kind: SignalKind,
        attribute: Attribute,
    },

    /// Duty write while the channel's enable gate is off
    #[error("Access denied: channel {channel} is disabled")]
    AccessDenied { channel: usize },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for virtual fan operations
pub type Result<T> = std::result::Result<T, VfanError>;

impl From<toml::de::Error> for VfanError {
    fn from(err: toml::de::Error) -> Self {
        VfanError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VfanError::ChannelOutOfRange {
            channel: 5,
            channels: 3,
        };
        assert_eq!(format!("{}", err), "Channel out of range: 5 (must be 0-2)");

        let err = VfanError::InvalidValue("duty must be 0-255, got 300".to_string());
        assert_eq!(format!("{}", err), "Invalid value: duty must be 0-255, got 300");

        let err = VfanError::AccessDenied { channel: 1 };
        assert_eq!(format!("{}", err), "Access denied: channel 1 is disabled");

        let err = VfanError::Unsupported {
            kind: SignalKind::Fan,
            attribute: Attribute::Enable,
        };
        assert_eq!(format!("{}", err), "Unsupported attribute: Fan Enable");
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not [valid").unwrap_err();
        let err: VfanError = toml_err.into();

        match err {
            VfanError::Config(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Config error"),
        }
    }
}
