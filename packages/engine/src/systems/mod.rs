//! Systems - the per-flake rules applied during a tick.
//!
//! Each system is a set of free functions over the field and a flake; the
//! simulation step decides the order.

pub mod drift;
pub mod stacking;
pub mod wind;

pub use drift::{apply_drift, jitter};
pub use stacking::{settle, SettleOutcome};
pub use wind::{AccelSource, LatchedAccel, WindSampler};
