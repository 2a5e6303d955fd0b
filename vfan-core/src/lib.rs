//! vfan Core Library
//!
//! Shared types, permission resolution, and configuration for the virtual
//! PWM fan device. This crate is used by the `vfan-device` crate and by
//! anything that hosts the simulated device.

pub mod access;
pub mod channels;
pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use access::access_for;
pub use channels::attributes_for;
pub use config::{DeviceConfig, TachometerMode, MAX_CHANNELS};
pub use error::*;
pub use types::*;
