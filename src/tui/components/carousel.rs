//! Narrow-screen showcase: each vehicle group becomes a swipeable carousel
//! with one slide per catalog item and pagination dots underneath.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget, Wrap};

use crate::core::carousel::CarouselState;
use crate::core::catalog::CatalogGroup;

pub const CAROUSEL_HEIGHT: u16 = 14;
const SLIDE_HEIGHT: u16 = 8;
const ARROW_WIDTH: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselLayout {
    pub heading: Rect,
    pub prev: Rect,
    pub slide: Rect,
    pub next: Rect,
    pub dots: Rect,
}

impl CarouselLayout {
    pub fn compute(area: Rect) -> Self {
        let [heading, _, row, dots, _] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(SLIDE_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        let [prev, slide, next] = Layout::horizontal([
            Constraint::Length(ARROW_WIDTH),
            Constraint::Min(0),
            Constraint::Length(ARROW_WIDTH),
        ])
        .areas(row);
        Self {
            heading,
            prev,
            slide,
            next,
            dots,
        }
    }
}

pub struct CarouselView<'a> {
    pub group: &'a CatalogGroup,
    pub state: CarouselState,
    pub focused: bool,
}

impl Widget for CarouselView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = CarouselLayout::compute(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                self.group.title.as_str(),
                Style::default()
                    .fg(Color::Rgb(0, 108, 188))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(self.group.tagline.as_str()),
        ])
        .alignment(Alignment::Center)
        .render(layout.heading, buf);

        let arrow_style = |enabled: bool| {
            if enabled {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        };
        let at_start = self.state.index() == 0;
        let at_end = self.state.index() + 1 >= self.state.len();
        let middle = |r: Rect| Rect {
            y: r.y + r.height / 2,
            height: r.height.min(1),
            ..r
        };
        Paragraph::new("‹")
            .alignment(Alignment::Center)
            .style(arrow_style(!at_start))
            .render(middle(layout.prev), buf);
        Paragraph::new("›")
            .alignment(Alignment::Center)
            .style(arrow_style(!at_end))
            .render(middle(layout.next), buf);

        let border = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let body = match self.group.items.get(self.state.index()) {
            Some(item) => vec![
                Line::from(Span::styled(
                    item.label.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled(
                    item.video_source.as_str(),
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            None => Vec::new(),
        };
        Paragraph::new(body)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(layout.slide, buf);

        Paragraph::new(self.state.dots())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .render(layout.dots, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{Group, GroupCatalog};

    #[test]
    fn test_renders_current_slide_and_dots() {
        let catalog = GroupCatalog::builtin();
        let group = catalog.get(Group::Commercial).unwrap();
        let mut state = CarouselState::new(group.items.len());
        state.next();

        let area = Rect::new(0, 0, 50, CAROUSEL_HEIGHT);
        let mut buf = Buffer::empty(area);
        CarouselView {
            group,
            state,
            focused: true,
        }
        .render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Commercial vehicles"));
        assert!(text.contains("Engine"));
        assert!(text.contains("○ ● ○"));
    }

    #[test]
    fn test_layout_fits_in_carousel_height() {
        let layout = CarouselLayout::compute(Rect::new(0, 10, 40, CAROUSEL_HEIGHT));
        assert!(layout.dots.bottom() <= 10 + CAROUSEL_HEIGHT);
        assert_eq!(layout.prev.y, layout.slide.y);
        assert_eq!(layout.next.x, layout.slide.right());
    }
}
