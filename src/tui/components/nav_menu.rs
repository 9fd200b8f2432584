//! # Navigation Menu Overlay
//!
//! The "mobile" menu: a centered list of every section, shown while
//! `menu_open` is set. Toggled with `m` or the nav bar's menu button.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `NavMenuState` lives in `TuiState`
//! - `NavMenu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::section::Section;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::ui::{ClickTarget, HitMap};

const MENU_WIDTH: u16 = 30;
/// One row per section plus the border.
const MENU_HEIGHT: u16 = Section::ALL.len() as u16 + 2;

/// Persistent state for the menu overlay.
#[derive(Default)]
pub struct NavMenuState {
    pub selected: usize,
    pub list_state: ListState,
}

impl NavMenuState {
    /// Put the highlight on `section`, used whenever the menu opens.
    pub fn focus(&mut self, section: Section) {
        self.selected = section.index();
        self.list_state.select(Some(self.selected));
    }
}

/// Events emitted by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Select(Section),
    Dismiss,
}

impl EventHandler for NavMenuState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape | TuiEvent::ToggleMenu => Some(MenuEvent::Dismiss),
            TuiEvent::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::ScrollDown => {
                self.selected = (self.selected + 1).min(Section::ALL.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Section::ALL.get(self.selected).copied().map(MenuEvent::Select),
            TuiEvent::Jump(section) => Some(MenuEvent::Select(*section)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the menu overlay.
pub struct NavMenu<'a> {
    state: &'a mut NavMenuState,
    active: Section,
    hits: &'a mut HitMap,
}

impl<'a> NavMenu<'a> {
    pub fn new(state: &'a mut NavMenuState, active: Section, hits: &'a mut HitMap) -> Self {
        Self { state, active, hits }
    }
}

impl Component for NavMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(MENU_WIDTH, MENU_HEIGHT, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Menu ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Go  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(overlay);

        let items: Vec<ListItem> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let is_active = *section == self.active;
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_active { " *" } else { "" };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}  ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{}{}", section.label(), marker), style),
                ]))
            })
            .collect();

        // Rows only line up with sections when the whole list fits.
        if inner.height as usize >= Section::ALL.len() {
            for (i, section) in Section::ALL.into_iter().enumerate() {
                let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
                self.hits.push(row, ClickTarget::Section(section));
            }
        }

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a rect of at most `width` × `height` centered in `outer`.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [center_v] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_focus_selects_section() {
        let mut state = NavMenuState::default();
        state.focus(Section::Projects);
        assert_eq!(state.selected, 4);
        assert_eq!(state.list_state.selected(), Some(4));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = NavMenuState::default();
        state.focus(Section::Home);
        assert_eq!(state.handle_event(&TuiEvent::ScrollUp), None);
        assert_eq!(state.selected, 0);

        for _ in 0..20 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        assert_eq!(state.selected, Section::ALL.len() - 1);
    }

    #[test]
    fn test_submit_selects_highlighted_section() {
        let mut state = NavMenuState::default();
        state.focus(Section::About);
        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(MenuEvent::Select(Section::Education))
        );
    }

    #[test]
    fn test_shortcut_and_dismiss() {
        let mut state = NavMenuState::default();
        assert_eq!(
            state.handle_event(&TuiEvent::Jump(Section::Contact)),
            Some(MenuEvent::Select(Section::Contact))
        );
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(MenuEvent::Dismiss));
        assert_eq!(state.handle_event(&TuiEvent::ToggleMenu), Some(MenuEvent::Dismiss));
        assert_eq!(state.handle_event(&TuiEvent::ScrollToTop), None);
    }

    #[test]
    fn test_menu_renders_sections_and_click_rows() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = NavMenuState::default();
        state.focus(Section::Home);
        let mut hits = HitMap::default();

        terminal
            .draw(|f| {
                NavMenu::new(&mut state, Section::Skills, &mut hits).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Menu"));
        assert!(text.contains("Skills *"));

        let overlay = centered_rect(MENU_WIDTH, MENU_HEIGHT, Rect::new(0, 0, 60, 20));
        let first_row = overlay.y + 1;
        let col = overlay.x + 5;
        assert_eq!(hits.at(col, first_row), Some(ClickTarget::Section(Section::Home)));
        assert_eq!(hits.at(col, first_row + 6), Some(ClickTarget::Section(Section::Contact)));
        assert_eq!(hits.at(col, first_row + 7), None);
    }
}
