use wasm_bindgen::prelude::*;

use crate::core::rng::SnowRng;
use crate::domain::SnowSettings;

use super::tick_stats::TickStats;
use super::SnowCore;

/// Snow field driven by the page: call `tick` from your own timer, then read
/// the buffers to draw.
#[wasm_bindgen]
pub struct SnowWorld {
    core: SnowCore,
}

#[wasm_bindgen]
impl SnowWorld {
    /// Default display preset, clock-seeded
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SnowCore::from_settings(&SnowSettings::default()),
        }
    }

    #[wasm_bindgen(js_name = fromSettings)]
    pub fn from_settings(json: &str) -> Result<SnowWorld, JsValue> {
        let settings = SnowSettings::from_json(json).map_err(|e| {
            log::warn!("rejected settings: {e}");
            JsValue::from_str(&e.to_string())
        })?;
        Ok(Self {
            core: SnowCore::from_settings(&settings),
        })
    }

    /// Default preset with a fixed seed (reproducible snowfall)
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(seed: u64) -> Self {
        let settings = SnowSettings::default();
        Self {
            core: SnowCore::new(settings.display.geometry(), SnowRng::from_seed_u64(seed)),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u16 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u16 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn flake_count(&self) -> usize { self.core.flakes().len() }

    #[wasm_bindgen(getter)]
    pub fn tick_count(&self) -> u64 { self.core.tick_count() }

    #[wasm_bindgen(getter)]
    pub fn reset_count(&self) -> u64 { self.core.reset_count() }

    /// Advance one tick. Pass the accelerometer x reading, or nothing when
    /// the sensor is unavailable.
    pub fn tick(&mut self, accel_x: Option<i32>) {
        let mut accel = accel_x;
        self.core.tick_with_sensor(&mut accel);
    }

    /// Clear the pile (tap gesture)
    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn height_at(&self, column: i32) -> u16 {
        self.core.height_at(column)
    }

    /// Enable or disable per-tick stats (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick stats (zeros when perf disabled)
    pub fn get_tick_stats(&self) -> TickStats {
        self.core.stats()
    }

    /// Get pointer to column heights (u16 per column, for JS rendering)
    pub fn heights_ptr(&self) -> *const u16 {
        self.core.heights_ptr()
    }

    pub fn heights_len(&self) -> usize {
        self.core.heights().len()
    }

    /// Refresh the flake buffer (`x, y, radius` i32 triples) and return it
    pub fn extract_flakes(&mut self) -> *const i32 {
        self.core.extract_flakes();
        self.core.flakes_transfer_ptr()
    }

    pub fn flakes_len(&self) -> usize {
        self.core.flakes_transfer_len()
    }

    /// Rasterize the scene and return the ABGR pixel buffer
    pub fn render_frame(&mut self) -> *const u32 {
        self.core.render_frame().as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.frame().len()
    }
}

impl Default for SnowWorld {
    fn default() -> Self {
        Self::new()
    }
}
