//! # Loader Component
//!
//! Full-screen placeholder shown while the page is loading.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Loader {
    spinner_frame: usize,
}

impl Loader {
    pub fn new(spinner_frame: usize) -> Self {
        Self { spinner_frame }
    }

    fn glyph(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }
}

impl Component for Loader {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.glyph(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Loading Portfolio...",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )),
        ];

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_loader_renders_message() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Loader::new(3).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Loading Portfolio..."));
        assert!(text.contains(SPINNER[3]));
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(Loader::new(SPINNER.len()).glyph(), SPINNER[0]);
    }
}
