//! Bottom line: status message on the left, key hints on the right.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct StatusBar {
    pub status_message: String,
    /// Context-sensitive hint for whatever has focus.
    pub hint: &'static str,
}

impl StatusBar {
    pub fn new(status_message: String, hint: &'static str) -> Self {
        Self {
            status_message,
            hint,
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hint_width = (self.hint.chars().count() as u16 + 1).min(area.width / 2);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hint_width)]).areas(area);

        frame.render_widget(
            Span::styled(
                format!(" {}", self.status_message),
                Style::default().fg(Color::Gray),
            ),
            left,
        );
        frame.render_widget(
            Paragraph::new(self.hint).style(Style::default().fg(Color::DarkGray)),
            right,
        );
    }
}
