//! Fixed-period gravity scheduler.
//!
//! The scheduler only answers "is a tick due now?". It is disarmed whenever the
//! game is not running (paused or over) and re-armed one full period after it
//! starts running again, the same way an interval timer behaves when it is
//! cleared on pause and recreated on resume.

/// Fires at most one gravity tick per period while armed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityScheduler {
    period_ms: u64,
    next_due_ms: Option<u64>,
}

impl GravityScheduler {
    /// A zero period is treated as 1 ms.
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            next_due_ms: None,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Arm or disarm to match `running` without firing.
    ///
    /// Arming schedules the first tick one period after `now_ms`; an already
    /// armed scheduler keeps its deadline.
    pub fn sync(&mut self, now_ms: u64, running: bool) {
        if !running {
            self.next_due_ms = None;
        } else if self.next_due_ms.is_none() {
            self.next_due_ms = Some(now_ms.saturating_add(self.period_ms));
        }
    }

    /// Returns true when a tick is due at `now_ms`, and schedules the next one.
    ///
    /// If the caller fell behind by more than a period, the missed ticks are
    /// dropped rather than replayed in a burst.
    pub fn poll(&mut self, now_ms: u64, running: bool) -> bool {
        let armed = self.is_armed();
        self.sync(now_ms, running);
        if !armed {
            return false;
        }

        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                let mut next = due.saturating_add(self.period_ms);
                if next <= now_ms {
                    next = now_ms.saturating_add(self.period_ms);
                }
                self.next_due_ms = Some(next);
                true
            }
            _ => false,
        }
    }

    /// Milliseconds until the next tick, or `None` while disarmed.
    pub fn time_until_due(&self, now_ms: u64) -> Option<u64> {
        self.next_due_ms.map(|due| due.saturating_sub(now_ms))
    }
}
