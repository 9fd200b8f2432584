//! # Host Facilities
//!
//! What the controller needs from its environment: a one-shot timer with
//! cancel, a scroll-position feed, and a smooth-scroll request.
//!
//! The host never calls back into the controller. Fired timers and scroll
//! offsets are handed to the controller by whoever drives the event loop
//! (`ViewController::on_timer` / `on_scroll`). That keeps every state
//! mutation on the loop's thread.
//!
//! Implementations:
//! - [`ManualHost`]: virtual clock, drives tests deterministically
//! - `tui::host::TerminalHost`: tokio timers + terminal viewport

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

pub trait Host {
    /// Schedule a single delivery of the returned id after `delay`.
    fn schedule_once(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending timer. Unknown or already-fired ids are a no-op.
    fn cancel(&mut self, timer: TimerId);

    /// Start reporting scroll offsets.
    fn subscribe_scroll(&mut self) -> SubscriptionId;

    /// Stop reporting scroll offsets. Unknown ids are a no-op.
    fn unsubscribe_scroll(&mut self, subscription: SubscriptionId);

    /// Move the viewport to `offset`. Fire-and-forget.
    fn scroll_to(&mut self, offset: u32, smooth: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub offset: u32,
    pub smooth: bool,
}

/// A host with a virtual clock. Time only moves when [`ManualHost::advance`] is called.
#[derive(Debug, Default)]
pub struct ManualHost {
    now: Duration,
    next_id: u64,
    timers: Vec<(TimerId, Duration)>,
    subscriptions: Vec<SubscriptionId>,
    scroll_requests: Vec<ScrollRequest>,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock forward and return the timers that came due, earliest first.
    /// Returned timers are removed; they fire once.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|(_, deadline)| *deadline <= now);
        self.timers = pending;
        due.sort_by_key(|(id, deadline)| (*deadline, *id));
        due.into_iter().map(|(id, _)| id).collect()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_subscribed(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Host for ManualHost {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id());
        self.timers.push((id, self.now + delay));
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.timers.retain(|(id, _)| *id != timer);
    }

    fn subscribe_scroll(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id());
        self.subscriptions.push(id);
        id
    }

    fn unsubscribe_scroll(&mut self, subscription: SubscriptionId) {
        self.subscriptions.retain(|id| *id != subscription);
    }

    fn scroll_to(&mut self, offset: u32, smooth: bool) {
        self.scroll_requests.push(ScrollRequest { offset, smooth });
    }
}
