use log::debug;

use super::Scheduler;

/// Handle stamped with the generation of the schedule call that produced it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimerHandle(u32);

/// Single-slot timer driven by a monotonic millisecond clock.
///
/// The embedder feeds the current time through [`Self::set_now`] or
/// [`Self::poll`] from its tick loop; nothing here reads a clock.
#[derive(Clone, Debug, Default)]
pub struct DeadlineScheduler {
    now_ms: u64,
    generation: u32,
    pending: Option<(TimerHandle, u64)>,
}

impl DeadlineScheduler {
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            generation: 0,
            pending: None,
        }
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.pending.map(|(_, deadline)| deadline)
    }

    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance the clock and take the pending handle if it has come due.
    pub fn poll(&mut self, now_ms: u64) -> Option<TimerHandle> {
        self.set_now(now_ms);
        match self.pending {
            Some((handle, deadline)) if deadline <= self.now_ms => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }
}

impl Scheduler for DeadlineScheduler {
    type Handle = TimerHandle;

    fn schedule(&mut self, delay_ms: u32) -> TimerHandle {
        self.generation = self.generation.wrapping_add(1);
        let handle = TimerHandle(self.generation);
        if let Some((previous, _)) = self.pending {
            debug!("timer: {:?} replaced by {:?}", previous, handle);
        }
        self.pending = Some((handle, self.now_ms.saturating_add(u64::from(delay_ms))));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }
}
