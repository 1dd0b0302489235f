//! Core - constants, errors, logging, randomness and the unchecked column
//! access everything else builds on.

#[path = "utils/safety.rs"]
pub mod safety;

pub mod constants;
pub mod error;
pub mod logging;
pub mod rng;
