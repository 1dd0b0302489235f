//! SnowFlake - one falling particle
//!
//! The pool never grows or shrinks; a flake that lands is respawned in place.

use rand::Rng;

use crate::core::constants::{flake_radius, MAX_SPEED, MAX_STEPS};
use crate::spatial::HeightField;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SnowFlake {
    /// Column, always in `0..width` between ticks
    pub x: i32,
    /// Distance from the top; may overshoot the pile for one frame
    pub y: i32,
    /// Pixels fallen per tick, `1..=MAX_SPEED`
    pub speed: u8,
    /// Ticks since the last jitter step, `0..MAX_STEPS`
    pub wobble: u8,
    pub radius: u8,
}

impl SnowFlake {
    /// A fresh flake somewhere above the pile.
    ///
    /// `scatter` places it at a random depth above its column instead of the
    /// top row, so the first frame after a reset is not a single line of snow.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, field: &HeightField, scatter: bool) -> Self {
        let x = rng.gen_range(0..field.width() as i32);
        let y = if scatter {
            match field.height_at(x) {
                0 => 0,
                h => rng.gen_range(0..h as i32),
            }
        } else {
            0
        };
        let speed = 1 + rng.gen_range(0..MAX_SPEED);
        Self {
            x,
            y,
            speed,
            wobble: rng.gen_range(0..MAX_STEPS),
            radius: flake_radius(speed),
        }
    }

    /// Has the flake reached (or passed) the pile in its column?
    #[inline]
    pub fn has_landed(&self, field: &HeightField) -> bool {
        self.y >= field.height_at(self.x) as i32
    }
}
