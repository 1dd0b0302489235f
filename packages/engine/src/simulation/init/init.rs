use crate::core::rng::SnowRng;
use crate::domain::{DisplayGeometry, SnowFlake, SnowSettings};
use crate::spatial::HeightField;
use crate::systems::WindSampler;

use super::raster::Framebuffer;
use super::tick_stats::TickStats;
use super::{RenderBuffers, SnowCore};

pub(super) fn create_snow_core(
    geometry: DisplayGeometry,
    mut rng: SnowRng,
    settings: &SnowSettings,
) -> SnowCore {
    let field = HeightField::new(geometry.width(), geometry.height());
    let flakes = (0..geometry.flake_count())
        .map(|_| SnowFlake::spawn(&mut rng, &field, true))
        .collect();

    log::info!(
        "snow field {}x{} with {} flakes",
        geometry.width(),
        geometry.height(),
        geometry.flake_count()
    );

    SnowCore {
        geometry,
        field,
        flakes,
        rng,
        wind: WindSampler::default(),
        tick: 0,
        resets: 0,
        render: RenderBuffers {
            flake_transfer: Vec::with_capacity(geometry.flake_count() * 3),
            frame: Framebuffer::new(geometry.width(), geometry.height(), settings.background_color),
            snow_color: settings.snow_color,
            background_color: settings.background_color,
        },
        perf_enabled: false,
        stats: TickStats::default(),
    }
}
