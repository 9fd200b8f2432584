//! # Scroll-to-Top Button
//!
//! Small bordered button pinned to the bottom-right corner of the page.
//! Only rendered while `scroll_top_visible` is set.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::tui::component::Component;
use crate::tui::ui::{ClickTarget, HitMap};

const LABEL: &str = "↑ Top";
const WIDTH: u16 = 9;
const HEIGHT: u16 = 3;
/// Keeps the button off the scrollbar column.
const RIGHT_MARGIN: u16 = 2;

pub struct ScrollTopButton<'a> {
    hits: &'a mut HitMap,
}

impl<'a> ScrollTopButton<'a> {
    pub fn new(hits: &'a mut HitMap) -> Self {
        Self { hits }
    }

    /// Where the button goes inside `area`, if it fits at all.
    pub fn placement(area: Rect) -> Option<Rect> {
        if area.width < WIDTH + RIGHT_MARGIN || area.height < HEIGHT {
            return None;
        }
        Some(Rect::new(
            area.right() - WIDTH - RIGHT_MARGIN,
            area.bottom() - HEIGHT,
            WIDTH,
            HEIGHT,
        ))
    }
}

impl Component for ScrollTopButton<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(button) = Self::placement(area) else {
            return;
        };
        let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let widget = Paragraph::new(LABEL)
            .centered()
            .style(style)
            .block(Block::bordered().border_type(BorderType::Rounded).border_style(style));

        frame.render_widget(Clear, button);
        frame.render_widget(widget, button);
        self.hits.push(button, ClickTarget::ScrollTop);
    }
}
