//! vfan-device
//!
//! The simulated fan device: per-channel mutable state plus the read and
//! write handlers a host attribute framework binds to. Built on top of the
//! types, permission resolver, and configuration in `vfan-core`.
//
//! Public API:
//! - `device::FanDevice` — attach/detach lifecycle, read/write handlers
//! - `state::FanState` — per-channel duty, enable gate, tachometer value

pub mod device;
pub mod state;

pub use device::FanDevice;
pub use state::FanState;
