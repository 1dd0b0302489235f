//! Domain - what the engine simulates: display shapes, flakes, settings.

pub mod flake;
pub mod geometry;
pub mod settings;

pub use flake::SnowFlake;
pub use geometry::{DisplayGeometry, DisplayShape};
pub use settings::SnowSettings;
