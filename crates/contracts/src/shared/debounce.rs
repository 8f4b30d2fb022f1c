//! Debounce policy, independent of any timer implementation.
//!
//! The caller records each triggering event with [`Debouncer::trigger`], starts
//! a timer for [`DebounceTicket::due_at_ms`], and on expiry asks
//! [`Debouncer::fire`] whether the action should run. Only the ticket of the
//! most recent event fires, and it fires at most once.

use super::sequence::{RequestToken, Sequencer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    token: RequestToken,
    /// Earliest time (ms) the action may run
    pub due_at_ms: u64,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u64,
    sequencer: Sequencer,
    pending: Option<RequestToken>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            sequencer: Sequencer::new(),
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn trigger(&mut self, now_ms: u64) -> DebounceTicket {
        let token = self.sequencer.issue();
        self.pending = Some(token);
        DebounceTicket {
            token,
            due_at_ms: now_ms + self.delay_ms,
        }
    }

    /// `true` exactly once, for the latest ticket, once it is due.
    pub fn fire(&mut self, ticket: DebounceTicket, now_ms: u64) -> bool {
        if now_ms < ticket.due_at_ms || self.pending != Some(ticket.token) {
            return false;
        }
        self.pending = None;
        true
    }

    /// Drops the pending action, e.g. when an immediate save supersedes it
    pub fn cancel(&mut self) {
        self.pending = None;
        self.sequencer.invalidate();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_fires_once_after_last_event() {
        let mut debouncer = Debouncer::new(500);
        let tickets: Vec<_> = [0u64, 80, 150, 320, 410]
            .iter()
            .map(|&t| debouncer.trigger(t))
            .collect();

        // Each timer expires `delay` after its own event
        let fired: Vec<u64> = tickets
            .iter()
            .filter(|t| debouncer.fire(**t, t.due_at_ms))
            .map(|t| t.due_at_ms)
            .collect();

        assert_eq!(fired, vec![910]);
        assert!(fired[0] >= 410 + 500);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_not_due_yet() {
        let mut debouncer = Debouncer::new(500);
        let ticket = debouncer.trigger(1_000);
        assert!(!debouncer.fire(ticket, 1_499));
        assert!(debouncer.fire(ticket, 1_500));
        assert!(!debouncer.fire(ticket, 1_600));
    }

    #[test]
    fn test_cancel() {
        let mut debouncer = Debouncer::new(500);
        let ticket = debouncer.trigger(0);
        debouncer.cancel();
        assert!(!debouncer.fire(ticket, 500));
    }

    #[test]
    fn test_separate_bursts_each_fire() {
        let mut debouncer = Debouncer::new(500);
        let first = debouncer.trigger(0);
        assert!(debouncer.fire(first, 500));
        let second = debouncer.trigger(2_000);
        assert!(debouncer.fire(second, 2_500));
    }
}
