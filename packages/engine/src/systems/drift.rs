//! Drift - sideways motion of a falling flake
//!
//! Flakes wander in occasional steps rather than every tick: the wobble
//! counter runs up to `MAX_STEPS`, and only then is a jitter step drawn.

use rand::Rng;

use crate::core::constants::{FUZZYNESS, MAX_STEPS};
use crate::domain::SnowFlake;

/// Advance the wobble counter and return this tick's jitter step.
pub fn jitter<R: Rng + ?Sized>(flake: &mut SnowFlake, rng: &mut R) -> i32 {
    flake.wobble += 1;
    if flake.wobble < MAX_STEPS {
        return 0;
    }
    flake.wobble = 0;
    let step = rng.gen_range(0..=FUZZYNESS);
    if rng.gen::<bool>() {
        -step
    } else {
        step
    }
}

/// Shift the flake sideways by `dx`, wrapping around the display width.
#[inline]
pub fn apply_drift(flake: &mut SnowFlake, dx: i32, width: u16) {
    // Widened so any i32 drift wraps instead of overflowing.
    flake.x = (i64::from(flake.x) + i64::from(dx)).rem_euclid(i64::from(width)) as i32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::SnowRng;

    #[test]
    fn jitter_only_fires_every_max_steps() {
        let mut rng = SnowRng::from_seed_u64(4);
        let mut flake = SnowFlake { wobble: 0, ..Default::default() };
        for tick in 1..(MAX_STEPS as usize * 3) {
            let step = jitter(&mut flake, &mut rng);
            if tick % MAX_STEPS as usize != 0 {
                assert_eq!(step, 0);
            } else {
                assert_eq!(flake.wobble, 0);
            }
            assert!(step.abs() <= FUZZYNESS);
        }
    }

    #[test]
    fn drift_wraps() {
        let mut flake = SnowFlake { x: 0, ..Default::default() };
        apply_drift(&mut flake, -1, 144);
        assert_eq!(flake.x, 143);
        apply_drift(&mut flake, 1, 144);
        assert_eq!(flake.x, 0);
        apply_drift(&mut flake, 300, 144);
        assert_eq!(flake.x, 12);
    }

    #[test]
    fn drift_wraps_at_the_i32_limits() {
        let mut flake = SnowFlake { x: 143, ..Default::default() };
        apply_drift(&mut flake, i32::MAX, 144);
        assert_eq!(flake.x, ((143 + i32::MAX as i64) % 144) as i32);

        apply_drift(&mut flake, i32::MIN, 144);
        assert!((0..144).contains(&flake.x));
    }
}
