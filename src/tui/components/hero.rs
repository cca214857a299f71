//! # Hero Section
//!
//! Full-viewport opening section: a looping background clip with the
//! headline centered over it. Only the clip's progress is animated.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, LineGauge, Paragraph, Widget};

pub const HEADLINE: &str = "Driven by performance";
pub const SUBHEADLINE: &str = "Soft trims and NVH solutions for seamless rides";
pub const HERO_CLIP: &str = "/automotive.224e7418884105595114.mp4";

pub struct HeroSection<'a> {
    /// Source currently loaded in the background player, if any.
    pub source: Option<&'a str>,
    pub progress: f32,
    pub playing: bool,
}

impl Widget for HeroSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::new().style(Style::default().bg(Color::Black));
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, text_area, _, clip_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(inner);

        let text = vec![
            Line::from(Span::styled(
                HEADLINE,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(SUBHEADLINE, Style::default().fg(Color::Gray))),
        ];
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(text_area, buf);

        let [clip_area] = Layout::horizontal([Constraint::Percentage(60)])
            .flex(Flex::Center)
            .areas(clip_area);
        let label = match (self.source, self.playing) {
            (Some(source), true) => format!("▶ {source}"),
            (Some(source), false) => format!("⏸ {source}"),
            (None, _) => String::from("no background clip"),
        };
        LineGauge::default()
            .ratio(f64::from(self.progress.clamp(0.0, 1.0)))
            .label(Span::styled(label, Style::default().fg(Color::DarkGray)))
            .filled_style(Style::default().fg(Color::Gray))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .render(clip_area, buf);
    }
}
