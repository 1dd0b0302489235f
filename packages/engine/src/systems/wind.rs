//! Wind - sideways drift from the accelerometer
//!
//! Tilting the display pushes the snow. The reading is peeked once per tick;
//! a missing reading means no wind, never an error.

use crate::core::constants::WIND_SCALE;
use crate::core::error::{SnowError, SnowResult};

/// Non-blocking accelerometer access.
pub trait AccelSource {
    /// Latest horizontal-axis sample, or `SensorUnavailable`.
    fn peek(&mut self) -> SnowResult<i32>;
}

/// Holds the most recent sample pushed by the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct LatchedAccel {
    latest: Option<i32>,
}

impl LatchedAccel {
    pub fn set(&mut self, x: i32) {
        self.latest = Some(x);
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}

impl AccelSource for LatchedAccel {
    fn peek(&mut self) -> SnowResult<i32> {
        self.latest.ok_or(SnowError::SensorUnavailable)
    }
}

impl AccelSource for Option<i32> {
    fn peek(&mut self) -> SnowResult<i32> {
        self.ok_or(SnowError::SensorUnavailable)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct WindSampler {
    scale: i32,
}

impl Default for WindSampler {
    fn default() -> Self {
        Self { scale: WIND_SCALE }
    }
}

impl WindSampler {
    /// Raw axis value to drift in pixels per tick (truncates toward zero).
    #[inline]
    pub fn sample(&self, raw: i32) -> i32 {
        raw / self.scale
    }

    /// Drift for this tick; 0 when the sensor could not be read.
    pub fn bias<A: AccelSource + ?Sized>(&self, source: &mut A) -> i32 {
        match source.peek() {
            Ok(raw) => self.sample(raw),
            Err(_) => 0,
        }
    }
}
