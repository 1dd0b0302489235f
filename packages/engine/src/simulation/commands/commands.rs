use crate::domain::SnowFlake;

use super::SnowCore;

pub(super) fn reset(world: &mut SnowCore) {
    world.field.reset();
    respawn_all(world);
    world.resets += 1;
    log::debug!("snow field reset #{} at tick {}", world.resets, world.tick);
}

/// Rescatter the whole pool in place over the current field.
pub(super) fn respawn_all(world: &mut SnowCore) {
    let SnowCore { flakes, field, rng, .. } = world;
    for flake in flakes.iter_mut() {
        *flake = SnowFlake::spawn(rng, field, true);
    }
}
