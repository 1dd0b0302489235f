use std::collections::VecDeque;

use snowdrift_engine::simulation::ticker::{TickHost, TickScheduler, TimerState};
use snowdrift_engine::systems::LatchedAccel;
use snowdrift_engine::{DisplayGeometry, SnowCore, SnowResult, SnowRng};

/// Single-threaded fake event loop: timers fire in arming order.
#[derive(Default)]
struct LoopHost {
    next: u64,
    pending: VecDeque<u64>,
    redraws: u32,
}

impl TickHost for LoopHost {
    type Handle = u64;

    fn arm(&mut self, _delay_ms: u32) -> SnowResult<u64> {
        self.next += 1;
        self.pending.push_back(self.next);
        Ok(self.next)
    }

    fn cancel(&mut self, handle: u64) {
        self.pending.retain(|&h| h != handle);
    }

    fn mark_dirty(&mut self) {
        self.redraws += 1;
    }
}

fn run_loop(
    sched: &mut TickScheduler<LoopHost>,
    core: &mut SnowCore,
    accel: &mut LatchedAccel,
    firings: usize,
) {
    for _ in 0..firings {
        let Some(handle) = sched.host_mut().pending.pop_front() else { break };
        sched.on_timer(handle, core, accel);
    }
}

#[test]
fn loop_keeps_exactly_one_timer_pending() {
    let mut core = SnowCore::new(DisplayGeometry::RECT, SnowRng::from_seed_u64(8));
    let mut accel = LatchedAccel::default();
    let mut sched = TickScheduler::new(LoopHost::default(), 50);

    sched.start().unwrap();
    run_loop(&mut sched, &mut core, &mut accel, 100);

    assert_eq!(core.tick_count(), 100);
    assert_eq!(sched.host().redraws, 100);
    assert_eq!(sched.host().pending.len(), 1);
}

#[test]
fn stop_leaves_no_timer_registered() {
    let mut core = SnowCore::new(DisplayGeometry::ROUND, SnowRng::from_seed_u64(8));
    let mut accel = LatchedAccel::default();
    accel.set(600);
    let mut sched = TickScheduler::new(LoopHost::default(), 50);

    sched.start().unwrap();
    run_loop(&mut sched, &mut core, &mut accel, 10);
    sched.stop();
    run_loop(&mut sched, &mut core, &mut accel, 10);

    assert!(sched.host().pending.is_empty());
    assert_eq!(sched.state(), TimerState::Stopped);
    assert_eq!(core.tick_count(), 10);
}
