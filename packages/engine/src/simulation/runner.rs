//! Browser runner: the tick loop on `window.setTimeout`
//!
//! The page pushes accelerometer readings as they arrive and gets an
//! `onDirty` call after every tick. `stop()` (or dropping the runner) clears
//! the pending timeout.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::core::error::{SnowError, SnowResult};
use crate::domain::SnowSettings;
use crate::systems::LatchedAccel;

use super::ticker::{TickHost, TickScheduler};
use super::SnowCore;

#[derive(Default)]
struct BrowserHost {
    window: Option<web_sys::Window>,
    callback: Option<Closure<dyn FnMut()>>,
    dirty: bool,
}

impl TickHost for BrowserHost {
    type Handle = i32;

    fn arm(&mut self, delay_ms: u32) -> SnowResult<i32> {
        let (Some(window), Some(callback)) = (&self.window, &self.callback) else {
            return Err(SnowError::Timer("runner has no window callback".into()));
        };
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .map_err(|e| SnowError::Timer(format!("setTimeout failed: {e:?}")))
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(window) = &self.window {
            window.clear_timeout_with_handle(handle);
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

struct RunnerState {
    core: SnowCore,
    scheduler: TickScheduler<BrowserHost>,
    accel: LatchedAccel,
}

/// Snow field with its own tick loop
#[wasm_bindgen]
pub struct SnowRunner {
    state: Rc<RefCell<RunnerState>>,
}

#[wasm_bindgen]
impl SnowRunner {
    /// `settings` is optional settings JSON
    #[wasm_bindgen(constructor)]
    pub fn new(settings: Option<String>) -> Result<SnowRunner, JsValue> {
        let settings = match settings {
            Some(json) => {
                SnowSettings::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => SnowSettings::default(),
        };
        let state = RunnerState {
            core: SnowCore::from_settings(&settings),
            scheduler: TickScheduler::new(BrowserHost::default(), settings.delay_ms),
            accel: LatchedAccel::default(),
        };
        Ok(Self {
            state: Rc::new(RefCell::new(state)),
        })
    }

    /// Begin ticking; `on_dirty` is called after every tick.
    pub fn start(&mut self, on_dirty: js_sys::Function) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let mut state = self.state.borrow_mut();
        if state.scheduler.is_running() {
            return Ok(());
        }

        let weak = Rc::downgrade(&self.state);
        let callback = Closure::<dyn FnMut()>::new(move || {
            let Some(state) = weak.upgrade() else { return };
            let dirty = {
                let mut guard = state.borrow_mut();
                let RunnerState { core, scheduler, accel } = &mut *guard;
                let ticked = match scheduler.armed_handle() {
                    Some(handle) => scheduler.on_timer(handle, core, accel),
                    None => false,
                };
                ticked && std::mem::take(&mut scheduler.host_mut().dirty)
            };
            // Outside the borrow: the page may read buffers from inside onDirty.
            if dirty {
                if let Err(e) = on_dirty.call0(&JsValue::NULL) {
                    log::warn!("onDirty threw: {e:?}");
                }
            }
        });

        let host = state.scheduler.host_mut();
        host.window = Some(window);
        host.callback = Some(callback);
        state
            .scheduler
            .start()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("snow runner started ({} ms)", state.scheduler.delay_ms());
        Ok(())
    }

    /// Cancel the pending tick. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.state.borrow_mut().scheduler.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.state.borrow().scheduler.is_running()
    }

    /// Latest accelerometer x reading (milli-g)
    #[wasm_bindgen(js_name = setAccelX)]
    pub fn set_accel_x(&mut self, x: i32) {
        self.state.borrow_mut().accel.set(x);
    }

    /// Sensor went away: no wind until the next reading
    #[wasm_bindgen(js_name = clearAccel)]
    pub fn clear_accel(&mut self) {
        self.state.borrow_mut().accel.clear();
    }

    /// Tap gesture: clear the pile
    pub fn tap(&mut self) {
        self.state.borrow_mut().core.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u16 {
        self.state.borrow().core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u16 {
        self.state.borrow().core.height()
    }

    pub fn heights_ptr(&self) -> *const u16 {
        self.state.borrow().core.heights_ptr()
    }

    pub fn extract_flakes(&mut self) -> *const i32 {
        let mut state = self.state.borrow_mut();
        state.core.extract_flakes();
        state.core.flakes_transfer_ptr()
    }

    pub fn render_frame(&mut self) -> *const u32 {
        self.state.borrow_mut().core.render_frame().as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.state.borrow().core.frame().len()
    }
}

impl Drop for SnowRunner {
    fn drop(&mut self) {
        // The timeout holds our closure; it must not outlive it.
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.scheduler.stop();
        }
    }
}
