//! Display geometry
//!
//! Width, height and flake count are fixed per target screen. The presets
//! match the watch displays the engine was tuned for; anything else goes
//! through `DisplayGeometry::new`.

use serde::{Deserialize, Serialize};

use crate::core::error::{SnowError, SnowResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayGeometry {
    width: u16,
    height: u16,
    flake_count: usize,
}

impl DisplayGeometry {
    /// 144x168 rectangular screen
    pub const RECT: Self = Self { width: 144, height: 168, flake_count: 200 };
    /// Same screen, lighter snowfall
    pub const RECT_SPARSE: Self = Self { width: 144, height: 168, flake_count: 150 };
    /// 180x180 round screen
    pub const ROUND: Self = Self { width: 180, height: 180, flake_count: 250 };

    pub fn new(width: u32, height: u32, flake_count: usize) -> SnowResult<Self> {
        if width == 0 || height == 0 {
            return Err(SnowError::InvalidGeometry(format!(
                "{width}x{height} has no columns or no rows"
            )));
        }
        let width = u16::try_from(width)
            .map_err(|_| SnowError::InvalidGeometry(format!("width {width} too large")))?;
        let height = u16::try_from(height)
            .map_err(|_| SnowError::InvalidGeometry(format!("height {height} too large")))?;
        Ok(Self { width, height, flake_count })
    }

    #[inline]
    pub fn width(&self) -> u16 { self.width }

    #[inline]
    pub fn height(&self) -> u16 { self.height }

    #[inline]
    pub fn flake_count(&self) -> usize { self.flake_count }
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        DisplayShape::default().geometry()
    }
}

/// Named display presets, selectable from settings JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayShape {
    Rect,
    RectSparse,
    Round,
}

impl DisplayShape {
    pub const fn geometry(self) -> DisplayGeometry {
        match self {
            DisplayShape::Rect => DisplayGeometry::RECT,
            DisplayShape::RectSparse => DisplayGeometry::RECT_SPARSE,
            DisplayShape::Round => DisplayGeometry::ROUND,
        }
    }
}

impl Default for DisplayShape {
    #[cfg(not(feature = "round"))]
    fn default() -> Self {
        DisplayShape::Rect
    }

    #[cfg(feature = "round")]
    fn default() -> Self {
        DisplayShape::Round
    }
}
