//! # Page Component
//!
//! Renders every portfolio section, top to bottom, as bordered cards inside a
//! single `ScrollView`.
//!
//! ## Architecture
//!
//! `Page` is a transient component (created each frame) wrapping
//! `&'a mut PageLayout` (cached section offsets) and `&'a mut Viewport`
//! (scroll position owned by the terminal host).
//!
//! Card heights come from `Paragraph::line_count`, so the layout cache always
//! matches what's drawn. The cached top row of each anchored section is what
//! nav-link jumps scroll to.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollbarVisibility};

use crate::core::content::{PageSection, Portfolio};
use crate::core::section::Section;
use crate::tui::component::Component;
use crate::tui::host::Viewport;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;

/// Where each section landed in the last layout pass.
#[derive(Debug, Default)]
pub struct PageLayout {
    tops: Vec<(PageSection, u16)>,
    total_height: u16,
}

impl PageLayout {
    /// First row of the block a nav entry points at.
    pub fn offset_of(&self, section: Section) -> Option<u16> {
        self.tops
            .iter()
            .find(|(block, _)| block.anchor() == Some(section))
            .map(|(_, top)| *top)
    }

    #[cfg(test)]
    pub fn total_height(&self) -> u16 {
        self.total_height
    }
}

pub struct Page<'a> {
    portfolio: &'a Portfolio,
    layout: &'a mut PageLayout,
    viewport: &'a mut Viewport,
}

impl<'a> Page<'a> {
    pub fn new(portfolio: &'a Portfolio, layout: &'a mut PageLayout, viewport: &'a mut Viewport) -> Self {
        Self {
            portfolio,
            layout,
            viewport,
        }
    }
}

impl Component for Page<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let text_width = content_width.saturating_sub(HORIZONTAL_OVERHEAD).max(1);

        let cards: Vec<(PageSection, Paragraph<'static>, u16)> = PageSection::ORDER
            .into_iter()
            .map(|block| {
                let paragraph = section_card(self.portfolio, block);
                let height = paragraph.line_count(text_width) as u16;
                (block, paragraph, height)
            })
            .collect();

        self.layout.tops.clear();
        let mut y: u16 = 0;
        for (block, _, height) in &cards {
            self.layout.tops.push((*block, y));
            y = y.saturating_add(*height);
        }
        self.layout.total_height = y;
        self.viewport.set_bounds(y, area.height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, y))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for ((_, paragraph, height), (_, top)) in cards.into_iter().zip(&self.layout.tops) {
            scroll_view.render_widget(paragraph, Rect::new(0, *top, content_width, height));
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.viewport.scroll_state);
    }
}

fn section_card(portfolio: &Portfolio, block: PageSection) -> Paragraph<'static> {
    let lines = match block {
        PageSection::Hero => hero_lines(portfolio),
        PageSection::About => vec![Line::raw(portfolio.about)],
        PageSection::Experience => experience_lines(portfolio),
        PageSection::Education => education_lines(portfolio),
        PageSection::Skills => skills_lines(portfolio),
        PageSection::Projects => projects_lines(portfolio),
        PageSection::Certifications => certification_lines(portfolio),
        PageSection::Contact => contact_lines(portfolio),
        PageSection::Footer => {
            return Paragraph::new(Line::styled(
                portfolio.footer,
                Style::default().fg(Color::DarkGray),
            ))
            .centered()
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::vertical(1)));
        }
    };

    let accent = Style::default().fg(Color::Cyan);
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .title(Span::styled(
                    format!(" {} ", block.title()),
                    accent.add_modifier(Modifier::BOLD),
                ))
                .border_type(BorderType::Rounded)
                .border_style(accent.add_modifier(Modifier::DIM))
                .padding(Padding::horizontal(CONTENT_PAD_H)),
        )
}

fn heading(text: &'static str) -> Line<'static> {
    Line::styled(text, Style::default().add_modifier(Modifier::BOLD))
}

fn muted(text: &'static str) -> Line<'static> {
    Line::styled(text, Style::default().fg(Color::DarkGray))
}

fn bullet(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::raw("• "), Span::raw(text)])
}

fn link(label: &'static str, target: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)),
        Span::styled(format!("  {target}"), Style::default().fg(Color::DarkGray)),
    ])
}

fn hero_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let owner = &portfolio.owner;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Hi, I'm ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                owner.full_name,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(owner.headline),
        muted(owner.tagline),
        Line::default(),
    ];
    lines.extend(owner.links.iter().map(|l| link(l.label, l.target)));
    lines.push(Line::default());
    lines.push(Line::styled(
        format!("[ {} ]  press {}", owner.call_to_action, Section::Projects.index() + 1),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ));
    lines
}

fn experience_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, job) in portfolio.experience.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(heading(job.role));
        lines.push(Line::raw(job.company));
        lines.push(muted(job.period));
        lines.push(Line::raw(job.summary));
        lines.extend(job.details.iter().copied().map(bullet));
        if let Some(l) = &job.link {
            lines.push(link(l.label, l.target));
        }
    }
    lines
}

fn education_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, entry) in portfolio.education.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(heading(entry.degree));
        lines.push(Line::raw(entry.school));
        lines.push(Line::raw(entry.grade));
        lines.push(muted(entry.period));
    }
    lines
}

fn skills_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, category) in portfolio.skills.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(heading(category.name));
        let mut chips = Vec::new();
        for skill in category.skills {
            chips.push(Span::styled(
                format!("[{skill}]"),
                Style::default().fg(Color::Magenta),
            ));
            chips.push(Span::raw(" "));
        }
        lines.push(Line::from(chips));
    }
    lines
}

fn projects_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, project) in portfolio.projects.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(heading(project.title));
        lines.push(muted(project.period));
        lines.push(Line::raw(project.summary));
        lines.extend(project.details.iter().copied().map(bullet));
        lines.push(link(project.link.label, project.link.target));
    }
    lines
}

fn certification_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    portfolio
        .certifications
        .iter()
        .map(|cert| {
            Line::from(vec![
                Span::styled(cert.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", cert.issuer), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect()
}

fn contact_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let contact = &portfolio.contact;
    let field_style = Style::default().fg(Color::DarkGray);
    let mut lines: Vec<Line<'static>> = contact
        .form_fields
        .iter()
        .map(|field| Line::styled(format!("▏{field:<24}▕"), field_style))
        .collect();
    lines.push(Line::styled(
        format!("[ {} ]", contact.submit_label),
        Style::default().fg(Color::Green),
    ));
    lines.push(Line::default());
    lines.push(Line::raw(format!("✉ {}", contact.email)));
    lines.push(Line::raw(format!("⌖ {}", contact.location)));
    lines.extend(contact.links.iter().map(|l| link(l.label, l.target)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::PORTFOLIO;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_page(width: u16, height: u16, layout: &mut PageLayout, viewport: &mut Viewport) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Page::new(&PORTFOLIO, layout, viewport).render(f, f.area()))
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
    fn test_layout_records_every_anchor_in_order() {
        let mut layout = PageLayout::default();
        let mut viewport = Viewport::default();
        render_page(80, 24, &mut layout, &mut viewport);

        assert_eq!(layout.offset_of(Section::Home), Some(0));
        let about = layout.offset_of(Section::About).unwrap();
        let experience = layout.offset_of(Section::Experience).unwrap();
        let education = layout.offset_of(Section::Education).unwrap();
        let contact = layout.offset_of(Section::Contact).unwrap();
        assert!(0 < about && about < experience && experience < education);
        assert!(education < contact && contact < layout.total_height());
    }

    #[test]
    fn test_viewport_bounds_follow_layout() {
        let mut layout = PageLayout::default();
        let mut viewport = Viewport::default();
        render_page(80, 24, &mut layout, &mut viewport);

        assert_eq!(viewport.viewport_height(), 24);
        assert_eq!(viewport.max_offset(), layout.total_height() - 24);
    }

    #[test]
    fn test_narrow_terminal_makes_page_taller() {
        let mut wide = PageLayout::default();
        let mut narrow = PageLayout::default();
        render_page(120, 24, &mut wide, &mut Viewport::default());
        render_page(50, 24, &mut narrow, &mut Viewport::default());
        assert!(narrow.total_height() > wide.total_height());
    }

    #[test]
    fn test_top_of_page_shows_hero() {
        let mut layout = PageLayout::default();
        let mut viewport = Viewport::default();
        let text = render_page(100, 20, &mut layout, &mut viewport);
        assert!(text.contains("Hruthik Krishna Pavarala"));
        assert!(text.contains("Information Technology Student"));
    }

    #[test]
    fn test_scrolled_page_shows_contact() {
        let mut layout = PageLayout::default();
        let mut viewport = Viewport::default();
        render_page(100, 20, &mut layout, &mut viewport);

        let contact = layout.offset_of(Section::Contact).unwrap();
        viewport.jump_to_row(contact);
        let text = render_page(100, 20, &mut layout, &mut viewport);
        assert!(text.contains("Get In Touch"));
        assert!(text.contains("Send Message"));
    }
}
