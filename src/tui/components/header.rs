//! # Header Component
//!
//! The fixed site header, drawn over the top of the page.
//!
//! It reads a `HeaderState` from the scroll tracker and nothing else:
//!
//! - hidden while the reader scrolls down, shown again on the way up or
//!   near the top of the page
//! - past the fold it switches to its elevated style: a filled bar with a
//!   shadow row underneath
//!
//! The nav items are clickable; `nav_targets` reports where each one lands
//! on screen using the same layout as `render`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::scroll::HeaderState;
use crate::tui::component::Component;

pub const BRAND: &str = "Supreme Group";

/// Header nav entries, each jumping to a part of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Applications,
    Company,
    Contact,
    Careers,
}

const NAV: [(NavLink, &str); 4] = [
    (NavLink::Applications, "Applications"),
    (NavLink::Company, "Company"),
    (NavLink::Contact, "Contact Us"),
    (NavLink::Careers, "Careers"),
];
const NAV_GAP: u16 = 3;

pub struct Header {
    pub state: HeaderState,
}

impl Header {
    pub fn new(state: HeaderState) -> Self {
        Self { state }
    }

    /// Rows the header occupies; zero while hidden.
    pub fn height(&self) -> u16 {
        match (self.state.visible, self.state.elevated) {
            (false, _) => 0,
            (true, false) => 1,
            (true, true) => 2,
        }
    }

    /// Screen rects of the nav items on the header bar, clipped to `area`.
    pub fn nav_targets(&self, area: Rect) -> Vec<(Rect, NavLink)> {
        if self.height() == 0 || area.height == 0 {
            return Vec::new();
        }
        let right = area.right();
        let mut x = area.x.saturating_add(brand_width()).saturating_add(2);
        let mut targets = Vec::new();
        for (link, label) in NAV {
            let width = (label.len() as u16).min(right.saturating_sub(x));
            if width == 0 {
                break;
            }
            targets.push((Rect::new(x, area.y, width, 1), link));
            x = x.saturating_add(label.len() as u16 + NAV_GAP);
        }
        targets
    }
}

fn brand_width() -> u16 {
    BRAND.len() as u16 + 2
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let height = self.height().min(area.height);
        if height == 0 {
            return;
        }
        let area = Rect { height, ..area };

        let bar_style = if self.state.elevated {
            Style::default().fg(Color::White).bg(Color::Rgb(0, 108, 188))
        } else {
            Style::default().fg(Color::White)
        };

        let [bar, shadow] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let mut spans = vec![
            Span::styled(format!(" {BRAND} "), bar_style.add_modifier(Modifier::BOLD)),
            Span::raw("  "),
        ];
        for (_, label) in NAV {
            spans.push(Span::styled(label, bar_style.add_modifier(Modifier::UNDERLINED)));
            spans.push(Span::raw(" ".repeat(NAV_GAP as usize)));
        }
        spans.push(Span::styled("LinkedIn", bar_style.add_modifier(Modifier::DIM)));

        frame.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), bar);

        if shadow.height > 0 {
            let shade = "▀".repeat(shadow.width as usize);
            frame.render_widget(
                Paragraph::new(shade).style(Style::default().fg(Color::DarkGray)),
                shadow,
            );
        }
    }
}
