//! # Terminal Host
//!
//! Implements the core `Host` facilities for a real terminal:
//!
//! - **Timers**: each `schedule_once` spawns a tokio task that sleeps, then sends
//!   `HostEvent::TimerFired` over a channel. `cancel` aborts the task.
//! - **Scroll feed**: the viewport offset is polled once per loop iteration;
//!   a change is reported in distance units (`rows × units_per_row`) while a
//!   subscription exists.
//! - **Smooth scroll**: a target row the viewport eases toward on each `tick()`.
//!
//! Nothing here touches the controller. The event loop collects fired timers and
//! scroll offsets and hands them over, so state changes stay on one thread.

use std::collections::HashMap;
use std::sync::mpsc;
use std::time::Duration;

use log::{debug, warn};
use ratatui::layout::Position;
use tokio::task::AbortHandle;
use tui_scrollview::ScrollViewState;

use crate::core::host::{Host, SubscriptionId, TimerId};

/// Messages from background tasks to the event loop.
#[derive(Debug)]
pub enum HostEvent {
    TimerFired(TimerId),
}

/// Scroll position of the page, in terminal rows.
#[derive(Default)]
pub struct Viewport {
    pub scroll_state: ScrollViewState,
    content_height: u16,
    viewport_height: u16,
    smooth_target: Option<u16>,
}

impl Viewport {
    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    #[cfg(test)]
    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Furthest row the top of the viewport can sit at.
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn is_animating(&self) -> bool {
        self.smooth_target.is_some()
    }

    /// Record the laid-out page size and clamp anything now out of range.
    pub fn set_bounds(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        let max = self.max_offset();
        if self.offset() > max {
            self.set_row(max);
        }
        if let Some(target) = self.smooth_target.as_mut() {
            *target = (*target).min(max);
        }
    }

    /// Manual scrolling; interrupts any smooth scroll in progress.
    pub fn scroll_rows(&mut self, delta: i32) {
        self.smooth_target = None;
        let row = (self.offset() as i32 + delta).clamp(0, u16::MAX as i32) as u16;
        self.set_row(row);
    }

    pub fn page(&mut self, pages: i32) {
        let page = self.viewport_height.saturating_sub(1).max(1) as i32;
        self.scroll_rows(pages * page);
    }

    /// Instant jump, like following an in-page anchor.
    pub fn jump_to_row(&mut self, row: u16) {
        self.smooth_target = None;
        self.set_row(row);
    }

    pub fn smooth_scroll_to(&mut self, row: u16) {
        let target = row.min(self.max_offset());
        if target == self.offset() {
            self.smooth_target = None;
        } else {
            self.smooth_target = Some(target);
        }
    }

    /// One animation step: a quarter of the remaining distance, at least one row.
    pub fn tick(&mut self) {
        let Some(target) = self.smooth_target else {
            return;
        };
        let current = self.offset();
        let distance = current.abs_diff(target);
        let step = (distance / 4).max(1);
        let next = if current > target {
            current - step
        } else {
            current + step
        };
        self.set_row(next);
        if next == target {
            self.smooth_target = None;
        }
    }

    fn set_row(&mut self, row: u16) {
        let y = row.min(self.max_offset());
        self.scroll_state.set_offset(Position { x: 0, y });
    }
}

pub struct TerminalHost {
    tx: mpsc::Sender<HostEvent>,
    rx: mpsc::Receiver<HostEvent>,
    next_id: u64,
    timers: HashMap<TimerId, AbortHandle>,
    subscription: Option<SubscriptionId>,
    last_reported_row: u16,
    units_per_row: u32,
    pub viewport: Viewport,
}

impl TerminalHost {
    pub fn new(units_per_row: u32) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            next_id: 0,
            timers: HashMap::new(),
            subscription: None,
            last_reported_row: 0,
            units_per_row: units_per_row.max(1),
            viewport: Viewport::default(),
        }
    }

    /// Timers whose task completed since the last call. Cancelled timers are
    /// filtered out even if their task raced the abort.
    pub fn fired_timers(&mut self) -> Vec<TimerId> {
        let timers = &mut self.timers;
        self.rx
            .try_iter()
            .filter_map(|event| match event {
                HostEvent::TimerFired(id) => timers.remove(&id).map(|_| id),
            })
            .collect()
    }

    /// The scroll feed: the new offset in distance units, if it moved since the
    /// last report and someone is subscribed.
    pub fn poll_scroll(&mut self) -> Option<u32> {
        self.subscription?;
        let row = self.viewport.offset();
        if row == self.last_reported_row {
            return None;
        }
        self.last_reported_row = row;
        Some(row as u32 * self.units_per_row)
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Host for TerminalHost {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id());
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(HostEvent::TimerFired(id)).is_err() {
                warn!("Failed to deliver timer {:?}: receiver dropped", id);
            }
        });
        self.timers.insert(id, handle.abort_handle());
        debug!("Scheduled timer {:?} in {}ms", id, delay.as_millis());
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        if let Some(handle) = self.timers.remove(&timer) {
            handle.abort();
            debug!("Cancelled timer {:?}", timer);
        }
    }

    fn subscribe_scroll(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id());
        self.subscription = Some(id);
        // Only movement after this point is news.
        self.last_reported_row = self.viewport.offset();
        id
    }

    fn unsubscribe_scroll(&mut self, subscription: SubscriptionId) {
        if self.subscription == Some(subscription) {
            self.subscription = None;
        }
    }

    fn scroll_to(&mut self, offset: u32, smooth: bool) {
        let row = (offset / self.units_per_row).min(u16::MAX as u32) as u16;
        if smooth {
            self.viewport.smooth_scroll_to(row);
        } else {
            self.viewport.jump_to_row(row);
        }
    }
}
