//! Snowfall constants
//!
//! Fixed at compile time. Display geometry lives in `domain::geometry`,
//! these are the motion parameters shared by every display shape.

/// Delay between the end of one tick and the start of the next (ms)
pub const DELAY_MS: u32 = 50;

/// Fastest fall speed in pixels per tick (slowest is 1)
pub const MAX_SPEED: u8 = 3;

/// Largest sideways jitter step in pixels
pub const FUZZYNESS: i32 = 2;

/// Ticks between two jitter steps of the same flake
pub const MAX_STEPS: u8 = 10;

/// Accelerometer units (milli-g) per pixel of wind drift
pub const WIND_SCALE: i32 = 250;

/// Packed ABGR colors (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA])
pub const SNOW_COLOR: u32 = 0xFFFFFFFF;
pub const BACKGROUND_COLOR: u32 = 0xFF000000;

/// Radius of a flake falling at `speed`: faster flakes render larger.
#[inline]
pub const fn flake_radius(speed: u8) -> u8 {
    ((speed as u32 * 2) / MAX_SPEED as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_tracks_speed() {
        assert_eq!(flake_radius(1), 0);
        assert_eq!(flake_radius(2), 1);
        assert_eq!(flake_radius(3), 2);
    }
}
