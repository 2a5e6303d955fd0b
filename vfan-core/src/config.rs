//! Device configuration
//!
//! A `DeviceConfig` is fixed for the lifetime of an attached device. It
//! captures the points where the simulated hardware variants differ:
//! channel count, how the tachometer behaves, and the initial state of
//! the per-channel enable gate.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VfanError};

/// Largest supported channel count
pub const MAX_CHANNELS: usize = 8;

/// How the tachometer channels derive their value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TachometerMode {
    /// RPM is computed from the duty value; `fan*_input` is read-only
    Derived,
    /// RPM is fed by an external reporting agent; `fan*_input` is writable
    External,
}

/// Static configuration for one simulated fan device.
///
/// Fixed at attach time and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Number of PWM/fan channel pairs (1-8)
    pub channels: usize,

    /// Tachometer behavior
    pub tachometer: TachometerMode,

    /// Initial value of every channel's enable gate
    ///
    /// Hardware variants disagree here: some power up accepting duty
    /// writes, some require an explicit enable first.
    pub start_enabled: bool,

    /// Optional upper bound applied to external tachometer writes
    ///
    /// `None` accepts any reported RPM as ground truth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rpm: Option<i64>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            channels: 3,
            tachometer: TachometerMode::External,
            start_enabled: true,
            max_rpm: None,
        }
    }
}

impl DeviceConfig {
    /// Single-channel device with a duty-derived tachometer
    ///
    /// This matches the simplest hardware variant: one `pwm1` plus a
    /// read-only `fan1_input`.
    pub fn single_derived() -> Self {
        Self {
            channels: 1,
            tachometer: TachometerMode::Derived,
            start_enabled: false,
            ..Default::default()
        }
    }

    /// Validate that this configuration describes a buildable device
    pub fn validate(&self) -> Result<()> {
        if self.channels == 0 || self.channels > MAX_CHANNELS {
            return Err(VfanError::Config(format!(
                "Channel count must be 1-{}, got {}",
                MAX_CHANNELS, self.channels
            )));
        }
        if let Some(max_rpm) = self.max_rpm {
            if max_rpm < 0 {
                return Err(VfanError::Config(format!(
                    "max_rpm must be non-negative, got {}",
                    max_rpm
                )));
            }
        }
        Ok(())
    }

    /// Parse a DeviceConfig from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this DeviceConfig to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| VfanError::Config(e.to_string()))
    }
}
