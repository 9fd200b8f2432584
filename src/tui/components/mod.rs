//! # TUI Components
//!
//! All UI components for the terminal page.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `Loader`: Spinner shown while the page is loading
//! - `NavBar`: Brand plus section links or the menu button
//! - `ScrollTopButton`: The "↑ Top" affordance
//!
//! ### Stateful Components
//!
//! Transient wrappers around state that lives in `TuiState`:
//! - `NavMenu` / `NavMenuState`: Menu overlay with its own selection
//! - `Page` / `PageLayout`: Scrollable section cards with cached anchor rows
//!
//! Components never read `ViewState` directly; the event loop hands them the
//! derived `View` as props. Clickable components write their regions into the
//! shared `HitMap` while rendering.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── loader.rs       (Loading placeholder)
//! ├── nav_bar.rs      (Top line)
//! ├── nav_menu.rs     (Menu overlay)
//! ├── page.rs         (Section cards in a ScrollView)
//! └── scroll_top.rs   (Scroll-to-top button)
//! ```

pub mod loader;
pub mod nav_bar;
pub mod nav_menu;
pub mod page;
pub mod scroll_top;

pub use loader::Loader;
pub use nav_bar::NavBar;
pub use nav_menu::{MenuEvent, NavMenu, NavMenuState};
pub use page::{Page, PageLayout};
pub use scroll_top::ScrollTopButton;
