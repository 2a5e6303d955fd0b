//! Permission resolution
//!
//! Maps a (signal kind, attribute, channel) triple to an access mode for
//! a given device configuration. The host framework calls this while
//! enumerating attribute endpoints, before any read or write happens, so
//! the function is pure and never touches device state.

use crate::config::{DeviceConfig, TachometerMode};
use crate::types::{Access, Attribute, SignalKind};

/// Resolve the access mode of one attribute endpoint.
///
/// Channels outside the configured count resolve to `Access::None`, as do
/// (kind, attribute) combinations the channel table does not carry.
pub fn access_for(
    config: &DeviceConfig,
    kind: SignalKind,
    attribute: Attribute,
    channel: usize,
) -> Access {
    if channel >= config.channels {
        return Access::None;
    }

    match (kind, attribute) {
        (SignalKind::Pwm, Attribute::Input)
        | (SignalKind::Pwm, Attribute::Enable)
        | (SignalKind::Pwm, Attribute::Mode) => Access::ReadWrite,
        (SignalKind::Fan, Attribute::Input) => match config.tachometer {
            TachometerMode::External => Access::ReadWrite,
            TachometerMode::Derived => Access::ReadOnly,
        },
        _ => Access::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn external_config() -> DeviceConfig {
        DeviceConfig::default()
    }

    fn derived_config() -> DeviceConfig {
        DeviceConfig {
            tachometer: TachometerMode::Derived,
            ..Default::default()
        }
    }

    #[test]
    fn test_pwm_attributes_are_read_write() {
        let config = external_config();
        for attr in [Attribute::Input, Attribute::Enable, Attribute::Mode] {
            assert_eq!(
                access_for(&config, SignalKind::Pwm, attr, 0),
                Access::ReadWrite
            );
        }
    }

    #[test]
    fn test_fan_input_depends_on_tachometer_mode() {
        assert_eq!(
            access_for(&external_config(), SignalKind::Fan, Attribute::Input, 0),
            Access::ReadWrite
        );
        assert_eq!(
            access_for(&derived_config(), SignalKind::Fan, Attribute::Input, 0),
            Access::ReadOnly
        );
    }

    #[test]
    fn test_fan_enable_and_mode_do_not_exist() {
        let config = external_config();
        assert_eq!(
            access_for(&config, SignalKind::Fan, Attribute::Enable, 0),
            Access::None
        );
        assert_eq!(
            access_for(&config, SignalKind::Fan, Attribute::Mode, 0),
            Access::None
        );
    }

    #[test]
    fn test_out_of_range_channel_is_invisible() {
        let config = external_config();
        assert_eq!(
            access_for(&config, SignalKind::Pwm, Attribute::Input, 3),
            Access::None
        );
        assert_eq!(
            access_for(&config, SignalKind::Fan, Attribute::Input, 100),
            Access::None
        );
    }

    #[test]
    fn test_all_channels_within_range_are_visible() {
        let config = external_config();
        for channel in 0..config.channels {
            assert!(access_for(&config, SignalKind::Pwm, Attribute::Input, channel).is_visible());
            assert!(access_for(&config, SignalKind::Fan, Attribute::Input, channel).is_visible());
        }
    }

    #[test]
    fn test_resolution_is_pure() {
        let config = external_config();
        let first = access_for(&config, SignalKind::Pwm, Attribute::Enable, 1);
        let second = access_for(&config, SignalKind::Pwm, Attribute::Enable, 1);
        assert_eq!(first, second);
    }
}
