//! Channel table
//!
//! Static description of which per-channel attributes exist for each
//! signal kind. This is the simulated device's equivalent of a hardware
//! channel info table: pure data, consulted for capability enumeration.

use crate::types::{Attribute, SignalKind};

/// Attributes every PWM channel carries
pub const PWM_ATTRIBUTES: &[Attribute] = &[Attribute::Input, Attribute::Enable, Attribute::Mode];

/// Attributes every fan (tachometer) channel carries
pub const FAN_ATTRIBUTES: &[Attribute] = &[Attribute::Input];

/// Ordered list of attributes that exist for a signal kind
pub fn attributes_for(kind: SignalKind) -> &'static [Attribute] {
    match kind {
        SignalKind::Pwm => PWM_ATTRIBUTES,
        SignalKind::Fan => FAN_ATTRIBUTES,
    }
}

/// Whether an attribute exists at all for a signal kind, regardless of
/// channel index or access mode
pub fn supports(kind: SignalKind, attribute: Attribute) -> bool {
    attributes_for(kind).contains(&attribute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pwm_attributes() {
        let attrs = attributes_for(SignalKind::Pwm);
        assert_eq!(attrs, &[Attribute::Input, Attribute::Enable, Attribute::Mode]);
    }

    #[test]
    fn test_fan_attributes() {
        let attrs = attributes_for(SignalKind::Fan);
        assert_eq!(attrs, &[Attribute::Input]);
    }

    #[test]
    fn test_supports() {
        assert!(supports(SignalKind::Pwm, Attribute::Enable));
        assert!(supports(SignalKind::Fan, Attribute::Input));
        assert!(!supports(SignalKind::Fan, Attribute::Enable));
        assert!(!supports(SignalKind::Fan, Attribute::Mode));
    }
}
