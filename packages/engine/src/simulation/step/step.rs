use crate::domain::SnowFlake;
use crate::systems::{apply_drift, jitter, settle, SettleOutcome};

use super::{commands, PerfTimer, SnowCore};

pub(super) fn tick(world: &mut SnowCore, wind_bias: i32) {
    let perf_on = world.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let width = world.geometry.width();
    let mut landings = 0u32;
    let mut settles = 0u32;
    let mut resets = 0u32;

    for i in 0..world.flakes.len() {
        let landed = world.flakes[i];
        if landed.has_landed(&world.field) {
            landings += 1;
            world.flakes[i] = SnowFlake::spawn(&mut world.rng, &world.field, false);

            // Snow lands under the old footprint, not the respawned one.
            let r = landed.radius as i32;
            for column in (landed.x - r)..=(landed.x + r) {
                match settle(&mut world.field, column, &mut world.rng) {
                    SettleOutcome::Settled { .. } => settles += 1,
                    SettleOutcome::Saturated { column } => {
                        log::debug!("column {column} full, resetting field");
                        commands::reset(world);
                        resets += 1;
                    }
                }
            }
        }

        let flake = &mut world.flakes[i];
        let dx = jitter(flake, &mut world.rng).saturating_add(wind_bias);
        apply_drift(flake, dx, width);
        flake.y += flake.speed as i32;
    }

    if perf_on {
        world.stats.reset();
        world.stats.landings = landings;
        world.stats.settles = settles;
        world.stats.resets = resets;
        world.stats.wind_bias = wind_bias;
        world.stats.flake_count = world.flakes.len() as u32;
        if let Some(start) = step_start {
            world.stats.step_ms = start.elapsed_ms();
        }
    }

    world.tick += 1;
}
