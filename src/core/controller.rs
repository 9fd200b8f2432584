//! # View-State Controller
//!
//! Owns `ViewState` and the two host resources it acquires on mount:
//! the loading timer and the scroll subscription.
//!
//! ```text
//!  Created ──on_mount()──▶ Mounted { timer, subscription } ──on_unmount()──▶ Unmounted
//!     │                                                                        ▲
//!     └──────────────────────────── drop ──────────────────────────────────────┘
//! ```
//!
//! Release is idempotent: each handle is `take()`n before it is given back to
//! the host, and `Drop` runs `on_unmount()` so an early return from the event
//! loop still releases both. Once unmounted, every handler is a no-op.

use log::{debug, info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::host::{Host, SubscriptionId, TimerId};
use crate::core::section::{InvalidSection, Section};
use crate::core::state::{View, ViewSettings, ViewState};

#[derive(Debug)]
enum Lifecycle {
    Created,
    Mounted {
        timer: Option<TimerId>,
        subscription: Option<SubscriptionId>,
    },
    Unmounted,
}

pub struct ViewController<H: Host> {
    state: ViewState,
    settings: ViewSettings,
    host: H,
    lifecycle: Lifecycle,
}

impl<H: Host> ViewController<H> {
    pub fn new(host: H, settings: ViewSettings) -> Self {
        Self {
            state: ViewState::default(),
            settings,
            host,
            lifecycle: Lifecycle::Created,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view()
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Mounted { .. })
    }

    /// Start the loading timer and subscribe to the scroll feed.
    pub fn on_mount(&mut self) {
        if !matches!(self.lifecycle, Lifecycle::Created) {
            warn!("on_mount called on a controller that was already mounted; ignoring");
            return;
        }
        let timer = self.host.schedule_once(self.settings.loading_delay);
        let subscription = self.host.subscribe_scroll();
        self.lifecycle = Lifecycle::Mounted {
            timer: Some(timer),
            subscription: Some(subscription),
        };
        info!(
            "Mounted (loading delay {}ms, timer {:?})",
            self.settings.loading_delay.as_millis(),
            timer
        );
    }

    /// Cancel the timer if still pending and drop the scroll subscription.
    pub fn on_unmount(&mut self) {
        let Lifecycle::Mounted {
            timer,
            subscription,
        } = &mut self.lifecycle
        else {
            return;
        };
        if let Some(timer) = timer.take() {
            self.host.cancel(timer);
        }
        if let Some(subscription) = subscription.take() {
            self.host.unsubscribe_scroll(subscription);
        }
        self.lifecycle = Lifecycle::Unmounted;
        info!("Unmounted");
    }

    /// Host delivery of a fired timer. Only the pending loading timer counts.
    pub fn on_timer(&mut self, fired: TimerId) {
        let Lifecycle::Mounted { timer, .. } = &mut self.lifecycle else {
            debug!("Ignoring timer {:?}: not mounted", fired);
            return;
        };
        if *timer != Some(fired) {
            debug!("Ignoring stale timer {:?}", fired);
            return;
        }
        *timer = None;
        self.dispatch(Action::LoadingElapsed);
        info!("Loading finished");
    }

    pub fn on_scroll(&mut self, offset: u32) {
        self.dispatch(Action::Scrolled(offset));
    }

    pub fn on_navigate(&mut self, section: Section) {
        self.dispatch(Action::Navigate(section));
    }

    /// String-typed navigation. Unknown ids are rejected and leave state alone.
    pub fn navigate_to(&mut self, id: &str) -> Result<(), InvalidSection> {
        let section = id.parse::<Section>().inspect_err(|e| {
            warn!("Rejected navigation: {}", e);
        })?;
        self.on_navigate(section);
        Ok(())
    }

    pub fn on_toggle_menu(&mut self) {
        self.dispatch(Action::ToggleMenu);
    }

    pub fn on_request_scroll_to_top(&mut self) {
        self.dispatch(Action::ScrollToTop);
    }

    fn dispatch(&mut self, action: Action) {
        if matches!(self.lifecycle, Lifecycle::Unmounted) {
            debug!("Dropping {:?} after unmount", action);
            return;
        }
        match update(&mut self.state, &self.settings, action) {
            Effect::None => {}
            Effect::SmoothScrollTo(offset) => self.host.scroll_to(offset, true),
        }
    }
}

impl<H: Host> Drop for ViewController<H> {
    fn drop(&mut self) {
        self.on_unmount();
    }
}
