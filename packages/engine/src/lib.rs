//! Snowdrift Engine - falling and piling snow for small fixed-size displays
//!
//! Architecture:
//! - core/        - constants, errors, logging, RNG
//! - domain/      - display geometry, flakes, settings
//! - spatial/     - the per-column height field
//! - systems/     - stacking, wind and drift rules
//! - simulation/  - tick orchestration, render readout, JS API

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init();
    log::info!("Snowdrift engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::{SnowError, SnowResult};
pub use crate::core::rng::SnowRng;
pub use domain::{DisplayGeometry, DisplayShape, SnowFlake, SnowSettings};
pub use simulation::{SnowCore, SnowRunner, SnowWorld, TickStats};
pub use spatial::HeightField;

// Export tuning constants for JS
#[wasm_bindgen]
pub fn delay_ms() -> u32 { crate::core::constants::DELAY_MS }
#[wasm_bindgen]
pub fn max_speed() -> u8 { crate::core::constants::MAX_SPEED }
#[wasm_bindgen]
pub fn wind_scale() -> i32 { crate::core::constants::WIND_SCALE }
