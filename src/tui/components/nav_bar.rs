//! # NavBar Component
//!
//! Top line of the page: brand on the left, then either the section links
//! (wide terminals) or a menu button (compact terminals).
//!
//! Stateless apart from the click regions it writes into the shared [`HitMap`],
//! so the event loop can map a mouse click back to a link.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::section::Section;
use crate::tui::component::Component;
use crate::tui::ui::{ClickTarget, HitMap};

const LINK_GAP: u16 = 2;

pub struct NavBar<'a> {
    pub brand: &'a str,
    pub active: Section,
    pub menu_open: bool,
    /// Collapse the links behind a menu button.
    pub compact: bool,
    pub hits: &'a mut HitMap,
}

impl NavBar<'_> {
    fn menu_button_label(&self) -> &'static str {
        if self.menu_open { "✕ Close" } else { "≡ Menu" }
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let brand = Span::styled(
            format!(" {} ", self.brand),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        );
        let mut x = area.x + brand.width() as u16;
        let mut spans = vec![brand];

        if self.compact {
            let button = Span::styled(
                format!(" {} ", self.menu_button_label()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            );
            let width = button.width() as u16;
            let button_x = area.right().saturating_sub(width).max(x);
            spans.push(Span::raw(" ".repeat((button_x - x) as usize)));
            // The brand alone can be wider than a very narrow terminal
            let visible = width.min(area.right().saturating_sub(button_x));
            if visible > 0 {
                self.hits.push(Rect::new(button_x, area.y, visible, 1), ClickTarget::MenuButton);
            }
            spans.push(button);
        } else {
            for section in Section::ALL {
                spans.push(Span::raw(" ".repeat(LINK_GAP as usize)));
                x += LINK_GAP;

                let style = if section == self.active {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let link = Span::styled(section.label(), style);
                let width = link.width() as u16;
                if x < area.right() {
                    let visible = width.min(area.right() - x);
                    self.hits.push(Rect::new(x, area.y, visible, 1), ClickTarget::Section(section));
                }
                x = x.saturating_add(width);
                spans.push(link);
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(width: u16, compact: bool, menu_open: bool, hits: &mut HitMap) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                NavBar {
                    brand: "Hruthik Pavarala",
                    active: Section::Skills,
                    menu_open,
                    compact,
                    hits: &mut *hits,
                }
                .render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_wide_nav_lists_every_section() {
        let mut hits = HitMap::default();
        let text = render(120, false, false, &mut hits);
        for section in Section::ALL {
            assert!(text.contains(section.label()));
        }
        assert!(!text.contains("Menu"));
    }

    #[test]
    fn test_wide_nav_click_regions_match_labels() {
        let mut hits = HitMap::default();
        let text = render(120, false, false, &mut hits);
        let col = text.find("Projects").unwrap() as u16;
        assert_eq!(hits.at(col, 0), Some(ClickTarget::Section(Section::Projects)));
        assert_eq!(hits.at(col + 7, 0), Some(ClickTarget::Section(Section::Projects)));
        assert_eq!(hits.at(0, 0), None);
    }

    #[test]
    fn test_compact_nav_shows_menu_button() {
        let mut hits = HitMap::default();
        let text = render(60, true, false, &mut hits);
        assert!(text.contains("Menu"));
        assert!(!text.contains("Projects"));
        assert_eq!(hits.at(59, 0), Some(ClickTarget::MenuButton));
    }

    #[test]
    fn test_compact_nav_button_reflects_open_menu() {
        let mut hits = HitMap::default();
        let text = render(60, true, true, &mut hits);
        assert!(text.contains("Close"));
    }

    #[test]
    fn test_compact_nav_narrower_than_brand() {
        let mut hits = HitMap::default();
        let text = render(12, true, false, &mut hits);
        assert!(text.starts_with(" Hruthik"));
        for col in 0..12 {
            assert_eq!(hits.at(col, 0), None);
        }
    }
}
