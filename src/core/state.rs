//! # View State
//!
//! The four flags that describe what the page looks like right now.
//! Domain only: no terminal types. Presentation caches live in `tui`.
//!
//! ```text
//! ViewState
//! ├── active_section: Section     // nav entry marked current
//! ├── menu_open: bool             // menu overlay visible
//! ├── scroll_top_visible: bool    // "↑ Top" affordance visible
//! └── loading: bool               // one-way latch, true until the delay elapses
//! ```
//!
//! State changes only happen through `update(state, settings, action)` in action.rs.

use std::time::Duration;

use crate::core::section::Section;

pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_SCROLL_TOP_THRESHOLD: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub active_section: Section,
    pub menu_open: bool,
    pub scroll_top_visible: bool,
    pub loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_section: Section::Home,
            menu_open: false,
            scroll_top_visible: false,
            loading: true,
        }
    }
}

impl ViewState {
    /// What the renderer is allowed to see. While loading, nothing else leaks out.
    pub fn view(&self) -> View {
        if self.loading {
            View::Loading
        } else {
            View::Page(PageView {
                active_section: self.active_section,
                menu_open: self.menu_open,
                scroll_top_visible: self.scroll_top_visible,
            })
        }
    }
}

/// Tunables for the controller, resolved from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    /// How long the loading placeholder stays up after mount.
    pub loading_delay: Duration,
    /// Offsets strictly greater than this show the scroll-to-top affordance.
    pub scroll_top_threshold: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            loading_delay: DEFAULT_LOADING_DELAY,
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
        }
    }
}

/// Output contract for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Loading,
    Page(PageView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    pub active_section: Section,
    pub menu_open: bool,
    pub scroll_top_visible: bool,
}
