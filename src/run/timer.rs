//! One-shot timer for the enemy's delayed response.
//!
//! The run owns exactly one of these. Every arm hands out a fresh
//! [`TimerHandle`]; a handle that was cancelled or replaced can never be
//! consumed again, so a late callback is simply dropped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingTimer {
    handle: TimerHandle,
    remaining_ms: u64,
    suspended: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnemyTurnTimer {
    next_id: u64,
    pending: Option<PendingTimer>,
}

impl EnemyTurnTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a firing after `delay_ms`, replacing anything pending.
    pub fn arm(&mut self, delay_ms: u64) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending = Some(PendingTimer {
            handle,
            remaining_ms: delay_ms,
            suspended: false,
        });
        handle
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Freeze the countdown (pause).
    pub fn suspend(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            pending.suspended = true;
        }
    }

    /// Continue a frozen countdown from where it stopped.
    pub fn resume(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            pending.suspended = false;
        }
    }

    /// Advance the countdown by `dt_ms`. Returns the handle once it is due.
    ///
    /// The handle stays pending until [`consume`](Self::consume) is called.
    pub fn advance(&mut self, dt_ms: u64) -> Option<TimerHandle> {
        let pending = self.pending.as_mut()?;
        if pending.suspended {
            return None;
        }
        pending.remaining_ms = pending.remaining_ms.saturating_sub(dt_ms);
        (pending.remaining_ms == 0).then_some(pending.handle)
    }

    /// Take the pending firing if `handle` is the live one and it is due.
    pub fn consume(&mut self, handle: TimerHandle) -> bool {
        match &self.pending {
            Some(p) if p.handle == handle && p.remaining_ms == 0 && !p.suspended => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Take the pending firing on behalf of an external scheduler that waited
    /// out the delay itself. The handle must be the live one and not suspended.
    pub fn take(&mut self, handle: TimerHandle) -> bool {
        match &self.pending {
            Some(p) if p.handle == handle && !p.suspended => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_suspended(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| p.suspended)
    }

    pub fn pending_handle(&self) -> Option<TimerHandle> {
        self.pending.as_ref().map(|p| p.handle)
    }

    pub fn remaining_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.remaining_ms)
    }
}
