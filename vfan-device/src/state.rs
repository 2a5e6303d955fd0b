//! Per-channel device state
//!
//! One `FanState` exists per attached device. It is only ever mutated
//! through the device's write handler; reads never change it.

use vfan_core::{ChannelStatus, DeviceConfig, TachometerMode, DEFAULT_DUTY, RPM_PER_DUTY};

/// Mutable state of every channel of one device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanState {
    /// PWM duty per channel, 0-255 after any successful write
    pub duty: Vec<i64>,
    /// Enable gate per channel; duty writes require the gate to be on
    pub enabled: Vec<bool>,
    /// Last externally reported RPM per channel (external mode only)
    pub tachometer: Vec<i64>,
}

impl FanState {
    /// Seed fresh state for an attaching device
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            duty: vec![DEFAULT_DUTY; config.channels],
            enabled: vec![config.start_enabled; config.channels],
            tachometer: vec![0; config.channels],
        }
    }

    /// Number of channels this state was seeded for
    pub fn channels(&self) -> usize {
        self.duty.len()
    }

    /// Effective RPM of a channel under the given tachometer mode
    ///
    /// Derived mode recomputes from duty on every call; there is no
    /// hidden cached value.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= self.channels()`. Range checking happens in
    /// the device handlers, which never pass an out-of-range index.
    pub fn rpm(&self, mode: TachometerMode, channel: usize) -> i64 {
        match mode {
            TachometerMode::Derived => self.duty[channel] * RPM_PER_DUTY,
            TachometerMode::External => self.tachometer[channel],
        }
    }

    /// Snapshot of one channel
    ///
    /// # Panics
    ///
    /// Panics if `channel >= self.channels()`; see [`FanState::rpm`].
    pub fn status(&self, mode: TachometerMode, channel: usize) -> ChannelStatus {
        ChannelStatus {
            channel,
            duty: self.duty[channel],
            enabled: self.enabled[channel],
            rpm: self.rpm(mode, channel),
        }
    }
}
