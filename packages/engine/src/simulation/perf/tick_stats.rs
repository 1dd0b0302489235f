use wasm_bindgen::prelude::*;

/// What happened during the last tick
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct TickStats {
    pub(super) step_ms: f64,
    pub(super) landings: u32,
    pub(super) settles: u32,
    pub(super) resets: u32,
    pub(super) wind_bias: i32,
    pub(super) flake_count: u32,
}

impl TickStats {
    pub(crate) fn reset(&mut self) {
        *self = TickStats::default();
    }
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    /// Flakes that reached the pile
    #[wasm_bindgen(getter)]
    pub fn landings(&self) -> u32 { self.landings }
    /// Units of snow added to the pile
    #[wasm_bindgen(getter)]
    pub fn settles(&self) -> u32 { self.settles }
    #[wasm_bindgen(getter)]
    pub fn resets(&self) -> u32 { self.resets }
    #[wasm_bindgen(getter)]
    pub fn wind_bias(&self) -> i32 { self.wind_bias }
    #[wasm_bindgen(getter)]
    pub fn flake_count(&self) -> u32 { self.flake_count }
}
