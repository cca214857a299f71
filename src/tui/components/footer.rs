//! Site footer: four link columns and the copyright line.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap};

use crate::tui::components::contact_section::ADDRESS;

pub const FOOTER_HEIGHT: u16 = 12;
pub const COPYRIGHT: &str = "©2024. All Rights Reserved.";

pub const SECTIONS: [(&str, &[&str]); 4] = [
    (
        "Applications",
        &["Apparel", "Automotive", "Filtration", "Customised Nonwoven"],
    ),
    (
        "Company",
        &["Who We Are", "Global Competency", "Innovation", "ESG Impact"],
    ),
    ("More", &["Contact Us", "Careers"]),
    ("Follow Us", &["LinkedIn"]),
];

pub struct Footer;

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::new()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(2))
            .style(Style::default().fg(Color::Black).bg(Color::Gray));
        let inner = block.inner(area);
        block.render(area, buf);

        let [columns, bottom] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);

        let cells = Layout::horizontal([Constraint::Ratio(1, SECTIONS.len() as u32); SECTIONS.len()])
            .split(columns);
        for (&(title, links), &cell) in SECTIONS.iter().zip(cells.iter()) {
            let mut lines = vec![
                Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))),
                Line::default(),
            ];
            lines.extend(links.iter().map(|l| Line::from(*l)));
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(cell, buf);
        }

        let address = ADDRESS.join(" ");
        Paragraph::new(vec![
            Line::from(COPYRIGHT),
            Line::from(Span::styled(address, Style::default().fg(Color::DarkGray))),
        ])
        .render(bottom, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sections_rendered() {
        let area = Rect::new(0, 0, 120, FOOTER_HEIGHT);
        let mut buf = Buffer::empty(area);
        Footer.render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        for (title, _) in SECTIONS {
            assert!(text.contains(title), "missing section {title}");
        }
        assert!(text.contains("Filtration"));
        assert!(text.contains(COPYRIGHT));
        assert!(text.contains("Mumbai - 400071"));
    }
}
