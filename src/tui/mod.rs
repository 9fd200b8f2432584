//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard/mouse events into controller calls.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (loading spinner, smooth scroll): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events, fired timers,
//!   or terminal resize.
//!
//! ## Lifecycle
//!
//! The controller is mounted once the terminal is ready and unmounted when
//! the loop exits. If drawing fails and `?` returns early, dropping the
//! controller unmounts it, so the timer and scroll subscription are always
//! released.

mod component;
pub mod components;
pub mod event;
pub mod host;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::content::PORTFOLIO;
use crate::core::controller::ViewController;
use crate::core::section::Section;
use crate::core::state::View;
use crate::tui::component::EventHandler;
use crate::tui::components::{MenuEvent, NavMenuState, PageLayout};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::host::TerminalHost;
use crate::tui::ui::{ClickTarget, HitMap};

/// TUI-specific presentation state (not part of the view state)
pub struct TuiState {
    pub page_layout: PageLayout,
    pub nav_menu: NavMenuState,
    pub hits: HitMap,
    /// Terminals narrower than this get the menu button instead of links.
    pub compact_width: u16,
}

impl TuiState {
    pub fn new(compact_width: u16) -> Self {
        Self {
            page_layout: PageLayout::default(),
            nav_menu: NavMenuState::default(),
            hits: HitMap::default(),
            compact_width,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(config.compact_width);
    let mut controller =
        ViewController::new(TerminalHost::new(config.units_per_row), config.view_settings());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    controller.on_mount();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let view = controller.view();
        let animating =
            matches!(view, View::Loading) || controller.host().viewport.is_animating();

        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            let viewport = &mut controller.host_mut().viewport;
            terminal.draw(|f| ui::draw_ui(f, view, &PORTFOLIO, &mut tui, viewport, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut controller, &mut tui, event) {
                should_quit = true;
                break;
            }
        }
        if should_quit {
            break;
        }

        for timer in controller.host_mut().fired_timers() {
            controller.on_timer(timer);
            needs_redraw = true;
        }

        controller.host_mut().viewport.tick();
        if let Some(offset) = controller.host_mut().poll_scroll() {
            debug!("Scroll offset: {}", offset);
            controller.on_scroll(offset);
            needs_redraw = true;
        }
    }

    controller.on_unmount();
    ratatui::restore();
    Ok(())
}

/// Route one input event. Returns true when the app should quit.
fn handle_event(
    controller: &mut ViewController<TerminalHost>,
    tui: &mut TuiState,
    event: TuiEvent,
) -> bool {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => return true,
        // Resize just needs a redraw (already flagged by the caller)
        TuiEvent::Resize => return false,
        _ => {}
    }

    let state = *controller.state();

    // While the menu is showing, it owns the keyboard
    if state.menu_open && !state.loading && !matches!(event, TuiEvent::MouseClick(..)) {
        match tui.nav_menu.handle_event(&event) {
            Some(MenuEvent::Select(section)) => navigate(controller, tui, section),
            Some(MenuEvent::Dismiss) => controller.on_toggle_menu(),
            None => {}
        }
        return false;
    }

    let viewport = &mut controller.host_mut().viewport;
    match event {
        TuiEvent::ScrollUp => viewport.scroll_rows(-1),
        TuiEvent::ScrollDown => viewport.scroll_rows(1),
        TuiEvent::ScrollPageUp => viewport.page(-1),
        TuiEvent::ScrollPageDown => viewport.page(1),
        TuiEvent::ScrollToTop => scroll_to_top(controller),
        TuiEvent::Jump(section) => navigate(controller, tui, section),
        TuiEvent::ToggleMenu => toggle_menu(controller, tui),
        TuiEvent::MouseClick(column, row) => match tui.hits.at(column, row) {
            Some(ClickTarget::Section(section)) => navigate(controller, tui, section),
            Some(ClickTarget::MenuButton) => toggle_menu(controller, tui),
            Some(ClickTarget::ScrollTop) => scroll_to_top(controller),
            None => {}
        },
        _ => {}
    }
    false
}

/// Select a section, then jump the viewport to its anchor.
fn navigate(controller: &mut ViewController<TerminalHost>, tui: &TuiState, section: Section) {
    controller.on_navigate(section);
    if let Some(row) = tui.page_layout.offset_of(section) {
        controller.host_mut().viewport.jump_to_row(row);
    }
}

/// The affordance only works while it's visible, however it was triggered.
fn scroll_to_top(controller: &mut ViewController<TerminalHost>) {
    let state = *controller.state();
    if state.scroll_top_visible && !state.loading {
        controller.on_request_scroll_to_top();
    }
}

fn toggle_menu(controller: &mut ViewController<TerminalHost>, tui: &mut TuiState) {
    controller.on_toggle_menu();
    if controller.state().menu_open {
        tui.nav_menu.focus(controller.state().active_section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ViewSettings;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// A mounted controller whose loading timer has already fired.
    async fn loaded_controller() -> ViewController<TerminalHost> {
        let settings = ViewSettings {
            loading_delay: Duration::from_millis(10),
            ..Default::default()
        };
        let mut controller = ViewController::new(TerminalHost::new(16), settings);
        controller.on_mount();
        tokio::time::sleep(Duration::from_millis(11)).await;
        for timer in controller.host_mut().fired_timers() {
            controller.on_timer(timer);
        }
        assert!(!controller.state().loading);
        controller
    }

    /// Draw once so the page layout and hit regions exist.
    fn draw(controller: &mut ViewController<TerminalHost>, tui: &mut TuiState, width: u16) {
        let backend = TestBackend::new(width, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = controller.view();
        let viewport = &mut controller.host_mut().viewport;
        terminal
            .draw(|f| ui::draw_ui(f, view, &PORTFOLIO, tui, viewport, 0))
            .unwrap();
    }

    fn pump_scroll(controller: &mut ViewController<TerminalHost>) {
        if let Some(offset) = controller.host_mut().poll_scroll() {
            controller.on_scroll(offset);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_events() {
        let mut controller = loaded_controller().await;
        let mut tui = TuiState::new(100);
        assert!(handle_event(&mut controller, &mut tui, TuiEvent::Quit));
        assert!(handle_event(&mut controller, &mut tui, TuiEvent::ForceQuit));
        assert!(!handle_event(&mut controller, &mut tui, TuiEvent::Resize));
    }

    #[tokio::test(start_paused = true)]
    async fn test_jump_navigates_and_scrolls_to_anchor() {
        let mut controller = loaded_controller().await;
        let mut tui = TuiState::new(100);
        draw(&mut controller, &mut tui, 120);

        handle_event(&mut controller, &mut tui, TuiEvent::Jump(Section::Projects));
        assert_eq!(controller.state().active_section, Section::Projects);

        let anchor = tui.page_layout.offset_of(Section::Projects).unwrap();
        let expected = anchor.min(controller.host().viewport.max_offset());
        assert_eq!(controller.host().viewport.offset(), expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scrolling_past_threshold_shows_scroll_top() {
        let mut controller = loaded_controller().await;
        let mut tui = TuiState::new(100);
        draw(&mut controller, &mut tui, 120);

        // 18 rows × 16 = 288 units: still hidden
        for _ in 0..18 {
            handle_event(&mut controller, &mut tui, TuiEvent::ScrollDown);
        }
        pump_scroll(&mut controller);
        assert!(!controller.state().scroll_top_visible);

        // 19 rows × 16 = 304 units: visible
        handle_event(&mut controller, &mut tui, TuiEvent::ScrollDown);
        pump_scroll(&mut controller);
        assert!(controller.state().scroll_top_visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_to_top_animates_back_and_hides_affordance() {
        let mut controller = loaded_controller().await;
        let mut tui = TuiState::new(100);
        draw(&mut controller, &mut tui, 120);

        handle_event(&mut controller, &mut tui, TuiEvent::Jump(Section::Contact));
        pump_scroll(&mut controller);
        assert!(controller.state().scroll_top_visible);

        handle_event(&mut controller, &mut tui, TuiEvent::ScrollToTop);
        assert!(controller.host().viewport.is_animating());
        while controller.host().viewport.is_animating() {
            controller.host_mut().viewport.tick();
            pump_scroll(&mut controller);
        }
        assert_eq!(controller.host().viewport.offset(), 0);
        assert!(!controller.state().scroll_top_visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_to_top_ignored_while_hidden() {
        let mut controller = loaded_controller().await;
        let mut tui = TuiState::new(100);
        draw(&mut controller, &mut tui, 120);

        handle_event(&mut controller, &mut tui, TuiEvent::ScrollDown);
        handle_event(&mut controller, &mut tui, TuiEvent::ScrollToTop);
        assert!(!controller.host().viewport.is_animating());
        assert_eq!(controller.host().viewport.offset(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_scroll_top_click_is_ignored() {
        let mut controller = loaded_controller().await;
        let mut tui = TuiState::new(100);
        draw(&mut controller, &mut tui, 120);

        // A region left over from an earlier frame, while the button is hidden
        tui.hits.push(ratatui::layout::Rect::new(0, 23, 10, 1), ClickTarget::ScrollTop);
        handle_event(&mut controller, &mut tui, TuiEvent::ScrollDown);
        handle_event(&mut controller, &mut tui, TuiEvent::MouseClick(1, 23));
        assert!(!controller.host().viewport.is_animating());
        assert_eq!(controller.host().viewport.offset(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_top_click_animates_when_visible() {
        let mut controller = loaded_controller().await;
        let mut tui = TuiState::new(100);
        draw(&mut controller, &mut tui, 120);

        handle_event(&mut controller, &mut tui, TuiEvent::Jump(Section::Contact));
        pump_scroll(&mut controller);
        draw(&mut controller, &mut tui, 120);

        let (column, row) = (0..24)
            .flat_map(|row| (0..120).map(move |col| (col, row)))
            .find(|(col, row)| tui.hits.at(*col, *row) == Some(ClickTarget::ScrollTop))
            .unwrap();
        handle_event(&mut controller, &mut tui, TuiEvent::MouseClick(column, row));
        assert!(controller.host().viewport.is_animating());
    }

    #[tokio::test(start_paused = true)]
    async fn test_menu_takes_keyboard_and_closes_on_select() {
        let mut controller = loaded_controller().await;
        let mut tui = TuiState::new(100);
        draw(&mut controller, &mut tui, 80);

        handle_event(&mut controller, &mut tui, TuiEvent::ToggleMenu);
        assert!(controller.state().menu_open);
        assert_eq!(tui.nav_menu.selected, Section::Home.index());

        // Arrow keys move the highlight, not the page
        handle_event(&mut controller, &mut tui, TuiEvent::ScrollDown);
        assert_eq!(controller.host().viewport.offset(), 0);
        assert_eq!(tui.nav_menu.selected, Section::About.index());

        handle_event(&mut controller, &mut tui, TuiEvent::Submit);
        assert_eq!(controller.state().active_section, Section::About);
        assert!(!controller.state().menu_open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_escape_dismisses_menu() {
        let mut controller = loaded_controller().await;
        let mut tui = TuiState::new(100);
        handle_event(&mut controller, &mut tui, TuiEvent::ToggleMenu);
        handle_event(&mut controller, &mut tui, TuiEvent::Escape);
        assert!(!controller.state().menu_open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_menu_button_then_menu_row() {
        let mut controller = loaded_controller().await;
        let mut tui = TuiState::new(100);
        draw(&mut controller, &mut tui, 80);

        // Compact nav: the menu button is at the far right of the top line
        handle_event(&mut controller, &mut tui, TuiEvent::MouseClick(79, 0));
        assert!(controller.state().menu_open);

        draw(&mut controller, &mut tui, 80);
        let (column, row) = (0..24)
            .flat_map(|row| (0..80).map(move |col| (col, row)))
            .find(|(col, row)| tui.hits.at(*col, *row) == Some(ClickTarget::Section(Section::Skills)))
            .unwrap();
        handle_event(&mut controller, &mut tui, TuiEvent::MouseClick(column, row));
        assert_eq!(controller.state().active_section, Section::Skills);
        assert!(!controller.state().menu_open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_during_loading_mutate_state_but_not_view() {
        let mut controller = ViewController::new(TerminalHost::new(16), ViewSettings::default());
        controller.on_mount();
        let mut tui = TuiState::new(100);

        handle_event(&mut controller, &mut tui, TuiEvent::Jump(Section::Contact));
        handle_event(&mut controller, &mut tui, TuiEvent::ToggleMenu);
        assert_eq!(controller.view(), View::Loading);
        assert_eq!(controller.state().active_section, Section::Contact);
        assert!(controller.state().menu_open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_releases_terminal_host_resources() {
        let mut controller = ViewController::new(TerminalHost::new(16), ViewSettings::default());
        controller.on_mount();
        assert_eq!(controller.host().pending_timers(), 1);
        assert!(controller.host().is_subscribed());

        controller.on_unmount();
        assert_eq!(controller.host().pending_timers(), 0);
        assert!(!controller.host().is_subscribed());

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(controller.host_mut().fired_timers().is_empty());
        assert!(controller.state().loading);
    }
}
