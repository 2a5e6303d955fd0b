//! Fan Device - attribute read/write handlers and lifecycle
//!
//! Implements the access-control and validation core of the simulated fan
//! controller. A host attribute framework enumerates endpoints through
//! `access_for`, then routes individual attribute reads and writes here.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};
use vfan_core::{
    access_for, Access, Attribute, ChannelStatus, DeviceConfig, Result, SignalKind,
    TachometerMode, VfanError, DUTY_MAX, DUTY_MIN,
};

use crate::state::FanState;

/// Simulated multi-channel PWM fan device
///
/// Handlers take `&self`; the state sits behind a mutex so concurrent
/// callers never observe a torn write. Each call checks and mutates state
/// under one lock acquisition, but no invariant is held across calls: an
/// enable write and a duty write are independent operations that may
/// interleave.
pub struct FanDevice {
    config: DeviceConfig,
    state: Mutex<FanState>,
}

impl FanDevice {
    /// Attach a new device with the given configuration.
    ///
    /// Seeds every channel with the default duty, the configured enable
    /// gate, and a zero tachometer reading.
    pub fn attach(config: DeviceConfig) -> Result<Self> {
        config.validate()?;
        let state = FanState::new(&config);
        info!(
            channels = config.channels,
            tachometer = ?config.tachometer,
            "fan device attached"
        );
        Ok(Self {
            config,
            state: Mutex::new(state),
        })
    }

    /// Detach the device, dropping all channel state.
    ///
    /// Consuming `self` makes calls after teardown unrepresentable.
    pub fn detach(self) {
        info!(channels = self.config.channels, "fan device detached");
    }

    /// Configuration this device was attached with
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Access mode of one attribute endpoint
    ///
    /// Pure capability enumeration; never touches channel state.
    pub fn access_for(&self, kind: SignalKind, attribute: Attribute, channel: usize) -> Access {
        access_for(&self.config, kind, attribute, channel)
    }

    /// A panicked holder cannot leave the state torn: every mutation is a
    /// single field store done after validation.
    fn lock_state(&self) -> MutexGuard<'_, FanState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn validate_channel(&self, channel: usize) -> Result<()> {
        if channel >= self.config.channels {
            return Err(VfanError::ChannelOutOfRange {
                channel,
                channels: self.config.channels,
            });
        }
        Ok(())
    }

    /// Read one attribute.
    ///
    /// Never mutates state. Unsupported (kind, attribute) combinations
    /// fail with `Unsupported`, bad channel indices with
    /// `ChannelOutOfRange`.
    pub fn read(&self, kind: SignalKind, attribute: Attribute, channel: usize) -> Result<i64> {
        self.validate_channel(channel)?;

        let state = self.lock_state();
        let value = match (kind, attribute) {
            (SignalKind::Pwm, Attribute::Input) => state.duty[channel],
            (SignalKind::Pwm, Attribute::Enable) => i64::from(state.enabled[channel]),
            (SignalKind::Fan, Attribute::Input) => state.rpm(self.config.tachometer, channel),
            // pwm*_mode is enumerated read-write but has no handler
            // backing, matching the simulated hardware.
            _ => return Err(VfanError::Unsupported { kind, attribute }),
        };

        debug!(?kind, ?attribute, channel, value, "attribute read");
        Ok(value)
    }

    /// Write one attribute.
    ///
    /// Validation order matches the simulated hardware: channel range,
    /// then per-attribute gating, then value domain. A failed write
    /// leaves all state unchanged.
    pub fn write(
        &self,
        kind: SignalKind,
        attribute: Attribute,
        channel: usize,
        value: i64,
    ) -> Result<()> {
        self.validate_channel(channel)?;

        let mut state = self.lock_state();
        match (kind, attribute) {
            (SignalKind::Pwm, Attribute::Enable) => {
                if value != 0 && value != 1 {
                    warn!(channel, value, "rejected enable write");
                    return Err(VfanError::InvalidValue(format!(
                        "enable must be 0 or 1, got {}",
                        value
                    )));
                }
                // Toggling the gate never touches the duty value.
                state.enabled[channel] = value == 1;
            }
            (SignalKind::Pwm, Attribute::Input) => {
                // The gate is authoritative for this call only; a racing
                // disable may land before or after, both are valid.
                if !state.enabled[channel] {
                    warn!(channel, value, "rejected duty write on disabled channel");
                    return Err(VfanError::AccessDenied { channel });
                }
                if !(DUTY_MIN..=DUTY_MAX).contains(&value) {
                    warn!(channel, value, "rejected out-of-range duty write");
                    return Err(VfanError::InvalidValue(format!(
                        "duty must be {}-{}, got {}",
                        DUTY_MIN, DUTY_MAX, value
                    )));
                }
                state.duty[channel] = value;
            }
            (SignalKind::Fan, Attribute::Input) => {
                match self.config.tachometer {
                    TachometerMode::External => {
                        // The reporting agent's value is ground truth;
                        // no enable gate applies.
                        if let Some(max_rpm) = self.config.max_rpm {
                            if value < 0 || value > max_rpm {
                                return Err(VfanError::InvalidValue(format!(
                                    "rpm must be 0-{}, got {}",
                                    max_rpm, value
                                )));
                            }
                        }
                        state.tachometer[channel] = value;
                    }
                    TachometerMode::Derived => {
                        return Err(VfanError::InvalidValue(
                            "tachometer is derived from duty and not writable".to_string(),
                        ));
                    }
                }
            }
            _ => {
                return Err(VfanError::InvalidValue(format!(
                    "no writable attribute {:?} {:?}",
                    kind, attribute
                )));
            }
        }

        debug!(?kind, ?attribute, channel, value, "attribute written");
        Ok(())
    }

    /// Snapshot of one channel
    pub fn status(&self, channel: usize) -> Result<ChannelStatus> {
        self.validate_channel(channel)?;
        let state = self.lock_state();
        Ok(state.status(self.config.tachometer, channel))
    }

    /// Snapshot of every channel
    pub fn status_all(&self) -> Vec<ChannelStatus> {
        let state = self.lock_state();
        (0..self.config.channels)
            .map(|channel| state.status(self.config.tachometer, channel))
            .collect()
    }
}
