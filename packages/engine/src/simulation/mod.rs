//! Snow simulation core
//!
//! `SnowCore` owns the height field and the flake pool. It is driven one
//! tick at a time by whoever owns it (the browser runner, a test, a native
//! tool) and is only read by the renderer between ticks.
//!
//! Per tick, for every flake in pool order:
//! - landed? respawn it at the top and settle snow under its old footprint
//! - jitter (every `MAX_STEPS` ticks) plus wind, wrapped around the width
//! - fall by its speed, unclamped
//!
//! A settle that hits an already full column resets the field and the pool.

use crate::core::rng::SnowRng;
use crate::domain::{DisplayGeometry, SnowFlake, SnowSettings};
use crate::spatial::HeightField;
use crate::systems::{AccelSource, WindSampler};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/tick_stats.rs"]
mod tick_stats;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/raster.rs"]
pub mod raster;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "schedule/ticker.rs"]
pub mod ticker;
mod facade;
mod runner;

pub use facade::SnowWorld;
pub use raster::Framebuffer;
pub use runner::SnowRunner;
pub use tick_stats::TickStats;
pub use ticker::{TickHost, TickScheduler};

use perf_timer::PerfTimer;

/// Host-facing buffers refreshed on demand by the render readout.
pub(crate) struct RenderBuffers {
    /// `x, y, radius` per flake
    pub(crate) flake_transfer: Vec<i32>,
    pub(crate) frame: Framebuffer,
    pub(crate) snow_color: u32,
    pub(crate) background_color: u32,
}

/// The simulation state
pub struct SnowCore {
    geometry: DisplayGeometry,
    field: HeightField,
    flakes: Vec<SnowFlake>,
    rng: SnowRng,
    wind: WindSampler,

    // State
    tick: u64,
    resets: u64,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    stats: TickStats,
}

impl SnowCore {
    /// Fresh field for `geometry`, flakes scattered above the ground.
    pub fn new(geometry: DisplayGeometry, rng: SnowRng) -> Self {
        init::create_snow_core(geometry, rng, &SnowSettings::default())
    }

    pub fn from_settings(settings: &SnowSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => SnowRng::from_seed_u64(seed),
            None => SnowRng::from_entropy(),
        };
        init::create_snow_core(settings.display.geometry(), rng, settings)
    }

    pub fn geometry(&self) -> DisplayGeometry { self.geometry }

    pub fn width(&self) -> u16 { self.geometry.width() }

    pub fn height(&self) -> u16 { self.geometry.height() }

    pub fn tick_count(&self) -> u64 { self.tick }

    /// Number of field resets since construction (saturation or tap)
    pub fn reset_count(&self) -> u64 { self.resets }

    pub fn heights(&self) -> &[u16] { self.field.as_slice() }

    #[inline]
    pub fn height_at(&self, column: i32) -> u16 { self.field.height_at(column) }

    pub fn flakes(&self) -> &[SnowFlake] { &self.flakes }

    /// Advance one tick with an already sampled wind drift.
    pub fn tick(&mut self, wind_bias: i32) {
        step::tick(self, wind_bias);
    }

    /// Advance one tick, peeking the accelerometer for wind.
    pub fn tick_with_sensor<A: AccelSource + ?Sized>(&mut self, accel: &mut A) {
        let bias = self.wind.bias(accel);
        step::tick(self, bias);
    }

    /// Clear the pile and rescatter every flake (startup, saturation, tap).
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    /// Enable or disable per-tick stats (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Last tick's stats (zeros when perf disabled)
    pub fn stats(&self) -> TickStats {
        self.stats.clone()
    }

    /// Refresh and return the packed `x, y, radius` flake buffer.
    pub fn extract_flakes(&mut self) -> &[i32] {
        render_extract::extract_flakes(self)
    }

    /// Rasterize flakes and skyline into the ABGR frame buffer.
    pub fn render_frame(&mut self) -> &Framebuffer {
        render_extract::render_frame(self)
    }

    pub fn frame(&self) -> &Framebuffer {
        &self.render.frame
    }

    /// Get pointer to the column heights (for JS rendering)
    pub fn heights_ptr(&self) -> *const u16 {
        self.field.as_ptr()
    }

    pub fn flakes_transfer_ptr(&self) -> *const i32 {
        self.render.flake_transfer.as_ptr()
    }

    pub fn flakes_transfer_len(&self) -> usize {
        self.render.flake_transfer.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
