//! # Actions
//!
//! Everything that can happen to the page becomes an `Action`.
//! User scrolls? That's `Action::Scrolled(offset)`.
//! Loading timer fires? That's `Action::LoadingElapsed`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the host to carry out.
//! No side effects here. Timers and scrolling happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::debug;

use crate::core::section::Section;
use crate::core::state::{ViewSettings, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LoadingElapsed,
    Scrolled(u32),
    Navigate(Section),
    ToggleMenu,
    ScrollToTop,
}

/// Work the host has to do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SmoothScrollTo(u32),
}

pub fn update(state: &mut ViewState, settings: &ViewSettings, action: Action) -> Effect {
    match action {
        Action::LoadingElapsed => {
            state.loading = false;
            Effect::None
        }
        Action::Scrolled(offset) => {
            state.scroll_top_visible = offset > settings.scroll_top_threshold;
            Effect::None
        }
        Action::Navigate(section) => {
            debug!("Navigate: {} -> {}", state.active_section, section);
            state.active_section = section;
            state.menu_open = false;
            Effect::None
        }
        Action::ToggleMenu => {
            state.menu_open = !state.menu_open;
            debug!("Menu open: {}", state.menu_open);
            Effect::None
        }
        Action::ScrollToTop => Effect::SmoothScrollTo(0),
    }
}
