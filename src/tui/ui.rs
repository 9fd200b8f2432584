use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::content::Portfolio;
use crate::core::section::Section;
use crate::core::state::View;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Loader, NavBar, NavMenu, Page, ScrollTopButton};
use crate::tui::host::Viewport;

/// Something clickable on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Section(Section),
    MenuButton,
    ScrollTop,
}

/// Click regions recorded during the last draw. Later entries sit on top.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, ClickTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: ClickTarget) {
        self.regions.push((area, target));
    }

    /// Hit test: the topmost target under the given screen cell.
    pub fn at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }
}

pub fn draw_ui(
    frame: &mut Frame,
    view: View,
    portfolio: &Portfolio,
    tui: &mut TuiState,
    viewport: &mut Viewport,
    spinner_frame: usize,
) {
    tui.hits.clear();

    let page = match view {
        View::Loading => {
            Loader::new(spinner_frame).render(frame, frame.area());
            return;
        }
        View::Page(page) => page,
    };

    use Constraint::{Length, Min};
    let [nav_area, page_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    NavBar {
        brand: portfolio.owner.short_name,
        active: page.active_section,
        menu_open: page.menu_open,
        compact: frame.area().width < tui.compact_width,
        hits: &mut tui.hits,
    }
    .render(frame, nav_area);

    Page::new(portfolio, &mut tui.page_layout, viewport).render(frame, page_area);

    if page.scroll_top_visible {
        ScrollTopButton::new(&mut tui.hits).render(frame, page_area);
    }

    if page.menu_open {
        NavMenu::new(&mut tui.nav_menu, page.active_section, &mut tui.hits).render(frame, page_area);
    }
}
