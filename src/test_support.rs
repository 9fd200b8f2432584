//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::time::Duration;

use crate::core::controller::ViewController;
use crate::core::host::ManualHost;
use crate::core::state::ViewSettings;

/// Creates a controller on a virtual clock with default settings (2000ms, 300).
pub fn test_controller() -> ViewController<ManualHost> {
    ViewController::new(ManualHost::new(), ViewSettings::default())
}

/// Advances the virtual clock and delivers whatever timers came due,
/// the way the event loop does.
pub fn advance_ms(controller: &mut ViewController<ManualHost>, ms: u64) {
    let fired = controller.host_mut().advance(Duration::from_millis(ms));
    for timer in fired {
        controller.on_timer(timer);
    }
}
