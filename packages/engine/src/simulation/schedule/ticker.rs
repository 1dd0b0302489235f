//! Self-rescheduling tick loop
//!
//! The host owns the clock. The scheduler arms a one-shot timer, and when it
//! fires runs exactly one tick, tells the renderer the frame is dirty, and
//! only then arms the next one. Ticks therefore never overlap and the real
//! period is `delay + tick time`.
//!
//! `stop()` cancels the pending timer; a firing that arrives afterwards (or
//! carries a stale handle) is ignored. If the host cannot arm a timer the
//! scheduler falls back to `Idle`, so it never reports a loop that will not
//! fire.

use std::fmt::Debug;

use crate::core::error::SnowResult;
use crate::systems::AccelSource;

use super::SnowCore;

/// Timer and redraw services provided by the host runtime.
pub trait TickHost {
    type Handle: Copy + PartialEq + Debug;

    /// Schedule a single firing after `delay_ms`.
    fn arm(&mut self, delay_ms: u32) -> SnowResult<Self::Handle>;

    /// Unregister a pending firing.
    fn cancel(&mut self, handle: Self::Handle);

    /// Ask for a redraw. Fire-and-forget.
    fn mark_dirty(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState<T> {
    Idle,
    Armed(T),
    Stopped,
}

pub struct TickScheduler<H: TickHost> {
    host: H,
    delay_ms: u32,
    state: TimerState<H::Handle>,
}

impl<H: TickHost> TickScheduler<H> {
    pub fn new(host: H, delay_ms: u32) -> Self {
        Self {
            host,
            delay_ms,
            state: TimerState::Idle,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn state(&self) -> TimerState<H::Handle> {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Armed(_))
    }

    /// Handle of the pending firing, if any.
    pub fn armed_handle(&self) -> Option<H::Handle> {
        match self.state {
            TimerState::Armed(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Arm the first firing. Returns `Ok(false)` if already running;
    /// restarts after `stop`.
    pub fn start(&mut self) -> SnowResult<bool> {
        if self.is_running() {
            return Ok(false);
        }
        self.state = TimerState::Idle;
        let handle = self.host.arm(self.delay_ms)?;
        self.state = TimerState::Armed(handle);
        Ok(true)
    }

    /// Timer callback. Returns whether a tick ran.
    pub fn on_timer<A: AccelSource + ?Sized>(
        &mut self,
        handle: H::Handle,
        core: &mut SnowCore,
        accel: &mut A,
    ) -> bool {
        match self.state {
            TimerState::Armed(armed) if armed == handle => {}
            state => {
                log::debug!("ignoring timer {handle:?} in state {state:?}");
                return false;
            }
        }
        self.state = TimerState::Idle;

        core.tick_with_sensor(accel);
        self.host.mark_dirty();

        match self.host.arm(self.delay_ms) {
            Ok(next) => self.state = TimerState::Armed(next),
            Err(e) => log::warn!("tick loop halted: {e}"),
        }
        true
    }

    /// Cancel the pending firing; no tick runs after this returns.
    pub fn stop(&mut self) {
        if let TimerState::Armed(handle) = self.state {
            self.host.cancel(handle);
        }
        self.state = TimerState::Stopped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SnowError;
    use crate::core::rng::SnowRng;
    use crate::domain::DisplayGeometry;
    use crate::systems::LatchedAccel;

    #[derive(Default)]
    struct FakeHost {
        next: u32,
        armed: Vec<(u32, u32)>,
        cancelled: Vec<u32>,
        dirty: u32,
        /// Number of further `arm` calls that succeed; `None` is unlimited.
        budget: Option<u32>,
    }

    impl TickHost for FakeHost {
        type Handle = u32;

        fn arm(&mut self, delay_ms: u32) -> SnowResult<u32> {
            match &mut self.budget {
                Some(0) => return Err(SnowError::Timer("no timer slots".into())),
                Some(left) => *left -= 1,
                None => {}
            }
            self.next += 1;
            self.armed.push((self.next, delay_ms));
            Ok(self.next)
        }

        fn cancel(&mut self, handle: u32) {
            self.cancelled.push(handle);
        }

        fn mark_dirty(&mut self) {
            self.dirty += 1;
        }
    }

    fn core() -> SnowCore {
        SnowCore::new(DisplayGeometry::new(16, 16, 4).unwrap(), SnowRng::from_seed_u64(1))
    }

    #[test]
    fn each_firing_ticks_once_then_rearms() {
        let mut core = core();
        let mut accel = LatchedAccel::default();
        let mut sched = TickScheduler::new(FakeHost::default(), 50);

        assert!(sched.start().unwrap());
        assert!(!sched.start().unwrap());
        for _ in 0..3 {
            let handle = sched.armed_handle().unwrap();
            assert!(sched.on_timer(handle, &mut core, &mut accel));
        }

        assert_eq!(core.tick_count(), 3);
        assert_eq!(sched.host().dirty, 3);
        assert_eq!(sched.host().armed.len(), 4);
        assert!(sched.host().armed.iter().all(|&(_, delay)| delay == 50));
    }

    #[test]
    fn stale_handle_is_ignored() {
        let mut core = core();
        let mut sched = TickScheduler::new(FakeHost::default(), 50);
        sched.start().unwrap();
        let first = sched.armed_handle().unwrap();
        assert!(sched.on_timer(first, &mut core, &mut None::<i32>));
        assert!(!sched.on_timer(first, &mut core, &mut None::<i32>));
        assert_eq!(core.tick_count(), 1);
    }

    #[test]
    fn stop_cancels_and_blocks_late_firings() {
        let mut core = core();
        let mut sched = TickScheduler::new(FakeHost::default(), 50);
        sched.start().unwrap();
        let pending = sched.armed_handle().unwrap();

        sched.stop();

        assert_eq!(sched.host().cancelled, vec![pending]);
        assert_eq!(sched.state(), TimerState::Stopped);
        assert!(!sched.on_timer(pending, &mut core, &mut None::<i32>));
        assert_eq!(core.tick_count(), 0);
        assert_eq!(sched.host().dirty, 0);

        // Stopping twice does not cancel anything new.
        sched.stop();
        assert_eq!(sched.host().cancelled.len(), 1);

        assert!(sched.start().unwrap());
        assert!(sched.is_running());
    }

    #[test]
    fn refused_first_timer_leaves_scheduler_idle() {
        let host = FakeHost { budget: Some(0), ..Default::default() };
        let mut sched = TickScheduler::new(host, 50);

        assert!(matches!(sched.start(), Err(SnowError::Timer(_))));
        assert!(!sched.is_running());
        assert_eq!(sched.state(), TimerState::Idle);

        sched.host_mut().budget = None;
        assert!(sched.start().unwrap());
        assert!(sched.is_running());
    }

    #[test]
    fn refused_rearm_stops_reporting_running() {
        let mut core = core();
        let host = FakeHost { budget: Some(1), ..Default::default() };
        let mut sched = TickScheduler::new(host, 50);
        sched.start().unwrap();

        let handle = sched.armed_handle().unwrap();
        assert!(sched.on_timer(handle, &mut core, &mut None::<i32>));

        assert_eq!(core.tick_count(), 1);
        assert_eq!(sched.host().dirty, 1);
        assert_eq!(sched.state(), TimerState::Idle);
        assert!(!sched.is_running());
        assert_eq!(sched.armed_handle(), None);
    }
}
