//! # Core Application Logic
//!
//! This module contains Folio's view-state logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ViewState (flags)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • ViewController       │
//!                    │                         │
//!                    │  No terminal types.     │
//!                    └───────────┬─────────────┘
//!                                │  Host trait
//!            ┌───────────────────┼───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │ ManualHost │
//!     │  Adapter   │                          │  (tests)   │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`section`]: The seven navigation targets
//! - [`state`]: `ViewState` and the derived `View`
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`host`]: Timer / scroll-feed / smooth-scroll facilities the controller needs
//! - [`controller`]: `ViewController`, which owns state and the host lifecycle
//! - [`config`]: Settings resolution
//! - [`content`]: The hand-authored portfolio

pub mod action;
pub mod config;
pub mod content;
pub mod controller;
pub mod host;
pub mod section;
pub mod state;
