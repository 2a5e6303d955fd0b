//! Core types and data structures for the virtual fan device

use serde::{Deserialize, Serialize};

/// Lowest accepted PWM duty value
pub const DUTY_MIN: i64 = 0;

/// Highest accepted PWM duty value
pub const DUTY_MAX: i64 = 255;

/// Duty value every channel starts with at attach time
pub const DEFAULT_DUTY: i64 = 100;

/// RPM reported per duty step in derived-tachometer mode
pub const RPM_PER_DUTY: i64 = 20;

/// Signal kind of an attribute group
///
/// `Pwm` covers the duty-cycle control side, `Fan` covers the tachometer
/// (RPM readback) side, following hwmon naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// PWM duty-cycle control channel
    Pwm,
    /// Tachometer (RPM) channel
    Fan,
}

/// Per-channel attribute within a signal kind
///
/// `Input` is the duty value for PWM channels and the RPM value for fan
/// channels. `Enable` and `Mode` only exist on PWM channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Primary value: duty (PWM) or RPM (fan)
    Input,
    /// Write gate for duty: 0 = disabled, 1 = manual control
    Enable,
    /// PWM signal mode; enumerated on PWM channels but not backed by
    /// the read/write handlers
    Mode,
}

/// Access mode of an attribute endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// Attribute does not exist for this (kind, attribute, channel) triple
    None,
    /// Attribute can only be read
    ReadOnly,
    /// Attribute can be read and written
    ReadWrite,
}

impl Access {
    /// Whether the endpoint exists at all
    pub fn is_visible(&self) -> bool {
        !matches!(self, Access::None)
    }

    /// Whether the endpoint accepts writes
    pub fn is_writable(&self) -> bool {
        matches!(self, Access::ReadWrite)
    }
}

/// hwmon-style node name for an attribute, e.g. `pwm1_enable` or
/// `fan2_input`. Channels are 0-indexed internally but 1-indexed in
/// node names, matching the sysfs convention.
pub fn node_name(kind: SignalKind, attribute: Attribute, channel: usize) -> String {
    let prefix = match kind {
        SignalKind::Pwm => "pwm",
        SignalKind::Fan => "fan",
    };
    match (kind, attribute) {
        // pwm1 carries the duty value directly, without a suffix
        (SignalKind::Pwm, Attribute::Input) => format!("{}{}", prefix, channel + 1),
        (_, Attribute::Input) => format!("{}{}_input", prefix, channel + 1),
        (_, Attribute::Enable) => format!("{}{}_enable", prefix, channel + 1),
        (_, Attribute::Mode) => format!("{}{}_mode", prefix, channel + 1),
    }
}

/// Point-in-time snapshot of one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStatus {
    /// Channel index
    pub channel: usize,
    /// Current PWM duty (0-255)
    pub duty: i64,
    /// Whether duty writes are currently accepted
    pub enabled: bool,
    /// Current tachometer reading
    pub rpm: i64,
}
