//! Spatial storage for the snow pile.

pub mod heightfield;

pub use heightfield::{HeightField, Lowered};
