use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Monotonic time source measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by `performance.now()` on the web.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-advanced clock for deterministic sequencing.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Shared cancellation flag for a scheduled event.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// A one-shot event due at a fixed point on the clock.
#[derive(Clone, Debug)]
pub struct ScheduledEvent {
    pub due: Duration,
    cancel: CancelToken,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventPoll {
    Waiting,
    Fired,
    Cancelled,
}

impl ScheduledEvent {
    pub fn after(now: Duration, delay: Duration) -> Self {
        Self {
            due: now + delay,
            cancel: CancelToken::default(),
        }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn poll(&self, now: Duration) -> EventPoll {
        if self.cancel.is_cancelled() {
            EventPoll::Cancelled
        } else if now >= self.due {
            EventPoll::Fired
        } else {
            EventPoll::Waiting
        }
    }
}

/// Converts variable frame deltas into a whole number of fixed ticks.
#[derive(Clone, Debug)]
pub struct FixedStep {
    step: Duration,
    max_ticks: u32,
    accum: Duration,
}

impl FixedStep {
    pub fn new(hz: u32, max_ticks: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / hz.max(1),
            max_ticks: max_ticks.max(1),
            accum: Duration::ZERO,
        }
    }

    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add elapsed time and return how many ticks to run now. Time beyond
    /// `max_ticks` is discarded so a background tab does not fast-forward.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accum += dt;
        let mut ticks = 0;
        while self.accum >= self.step && ticks < self.max_ticks {
            self.accum -= self.step;
            ticks += 1;
        }
        if ticks == self.max_ticks {
            self.accum = Duration::ZERO;
        }
        ticks
    }
}
