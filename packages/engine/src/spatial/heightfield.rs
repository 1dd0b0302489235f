//! HeightField - one terrain height per pixel column
//!
//! Heights are distances from the top of the display: `height` means no
//! snow, 0 means the column is piled to the very top. Every accessor takes a
//! signed column and wraps it around the width, so neighbour arithmetic like
//! `x - 1` or `x + radius` never needs a bounds check at the call site.

use crate::core::safety::{read_wrapped, write_wrapped};

/// Result of trying to add one unit of snow to a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lowered {
    /// The column grew by one unit
    Settled,
    /// The column was already piled to the top
    Saturated,
}

pub struct HeightField {
    columns: Vec<u16>,
    height: u16,
}

impl HeightField {
    /// Empty field (no snow) of `width` columns.
    pub fn new(width: u16, height: u16) -> Self {
        debug_assert!(width > 0, "height field needs at least one column");
        Self {
            columns: vec![height; width as usize],
            height,
        }
    }

    /// Clear all snow: every column back to the full display height.
    pub fn reset(&mut self) {
        self.columns.fill(self.height);
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.columns.len() as u16
    }

    /// Full display height (an empty column)
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reduce any column index, negative or past the edge, into `0..width`.
    #[inline]
    pub fn wrap(&self, column: i32) -> usize {
        column.rem_euclid(self.columns.len() as i32) as usize
    }

    #[inline]
    pub fn height_at(&self, column: i32) -> u16 {
        let idx = self.wrap(column);
        // SAFETY: `wrap` returns an index below `columns.len()`.
        unsafe { read_wrapped(&self.columns, idx) }
    }

    /// Add one unit of snow to `column` unless it is already full.
    pub fn lower(&mut self, column: i32) -> Lowered {
        let idx = self.wrap(column);
        // SAFETY: `wrap` returns an index below `columns.len()`.
        let current = unsafe { read_wrapped(&self.columns, idx) };
        if current == 0 {
            return Lowered::Saturated;
        }
        unsafe { write_wrapped(&mut self.columns, idx, current - 1) };
        Lowered::Settled
    }

    /// Overwrite one column. Values above the display height are clamped.
    pub fn set_height(&mut self, column: i32, value: u16) {
        let idx = self.wrap(column);
        let value = value.min(self.height);
        // SAFETY: `wrap` returns an index below `columns.len()`.
        unsafe { write_wrapped(&mut self.columns, idx, value) };
    }

    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.columns
    }

    /// Pointer to the column array (for JS rendering)
    pub fn as_ptr(&self) -> *const u16 {
        self.columns.as_ptr()
    }
}
