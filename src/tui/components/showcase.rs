//! # Showcase Panel
//!
//! The desktop "automotive applications" panel: a rail listing the vehicle
//! groups, a stage showing the active clip, and a control strip with one
//! button per catalog item plus play/pause and a progress gauge.
//!
//! ```text
//! ┌ rail ───────────┐┌ stage ─────────────────────────────┐
//! │┃ Passenger      ││ ▶ Complete body                    │
//! │  Commercial     ││                                    │
//! │                 │└────────────────────────────────────┘
//! │                 │[Complete body][Front][Cabin]… [⏸] ━━━
//! ```
//!
//! The strip's arity always comes from the catalog; each button gets an
//! equal share of the row.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, LineGauge, Paragraph, Widget, Wrap};

use crate::core::action::Action;
use crate::core::catalog::{Group, GroupCatalog};
use crate::core::showcase::ShowcaseView;
use crate::tui::event::TuiEvent;

/// Smallest panel that still fits rail, stage and strip.
pub const MIN_PANEL_HEIGHT: u16 = 16;
pub const HEADING_HEIGHT: u16 = 4;

const RAIL_MAX_WIDTH: u16 = 34;
const RAIL_ENTRY_HEIGHT: u16 = 4;
const STRIP_HEIGHT: u16 = 3;
const PLAY_WIDTH: u16 = 5;
const GAUGE_WIDTH: u16 = 12;

const ACCENT: Color = Color::Rgb(0, 108, 188);

/// Section title above the showcase.
pub struct ShowcaseHeading;

impl Widget for ShowcaseHeading {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::default(),
            Line::from(vec![
                Span::raw("Evolving the drive with "),
                Span::styled("360-degree", Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from("comprehensive solutions"),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .render(area, buf);
    }
}

/// Where each clickable part of the panel sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub groups: Vec<(Group, Rect)>,
    pub stage: Rect,
    pub controls: Vec<Rect>,
    pub play: Rect,
    pub gauge: Rect,
}

impl PanelLayout {
    pub fn compute(area: Rect, groups: &[Group], control_count: usize) -> Self {
        let rail_width = (area.width / 3).min(RAIL_MAX_WIDTH);
        let [rail, main] =
            Layout::horizontal([Constraint::Length(rail_width), Constraint::Min(0)]).areas(area);

        let mut rail_rows: Vec<Constraint> = vec![Constraint::Length(1)];
        rail_rows.extend(groups.iter().map(|_| Constraint::Length(RAIL_ENTRY_HEIGHT)));
        rail_rows.push(Constraint::Min(0));
        let rail_cells = Layout::vertical(rail_rows).split(rail);
        let groups = groups
            .iter()
            .enumerate()
            .map(|(i, &group)| (group, rail_cells[i + 1]))
            .collect();

        let [stage, strip_row] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STRIP_HEIGHT)]).areas(main);
        let [strip, play, gauge] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(PLAY_WIDTH),
            Constraint::Length(GAUGE_WIDTH),
        ])
        .areas(strip_row);

        let controls = if control_count == 0 {
            Vec::new()
        } else {
            let n = control_count as u32;
            Layout::horizontal(vec![Constraint::Ratio(1, n); control_count])
                .split(strip)
                .to_vec()
        };

        Self {
            groups,
            stage,
            controls,
            play,
            gauge: Rect {
                y: gauge.y + gauge.height / 2,
                height: gauge.height.min(1),
                ..gauge
            },
        }
    }
}

pub struct ShowcasePanel<'a> {
    pub catalog: &'a GroupCatalog,
    pub view: ShowcaseView<'a>,
    /// Loop position of the active clip, `[0, 1]`.
    pub progress: f32,
    pub focused: bool,
}

impl ShowcasePanel<'_> {
    pub fn layout(&self, area: Rect) -> PanelLayout {
        let groups: Vec<Group> = self.catalog.groups().collect();
        PanelLayout::compute(area, &groups, self.view.items.len())
    }

    fn render_rail(&self, layout: &PanelLayout, buf: &mut Buffer) {
        for &(group, cell) in &layout.groups {
            let Some(entry) = self.catalog.get(group) else {
                continue;
            };
            let active = group == self.view.active_group;
            let (bar, title_style) = if active {
                ("┃ ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default().fg(Color::DarkGray))
            };
            let lines = vec![
                Line::from(vec![
                    Span::styled(bar, Style::default().fg(ACCENT)),
                    Span::styled(entry.title.as_str(), title_style),
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        entry.tagline.as_str(),
                        if active {
                            Style::default().fg(Color::Gray)
                        } else {
                            Style::default().fg(Color::DarkGray)
                        },
                    ),
                ]),
            ];
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(cell, buf);
        }
    }

    fn render_stage(&self, layout: &PanelLayout, buf: &mut Buffer) {
        let border = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = self
            .view
            .current_item
            .map(|item| format!(" {} ", item.label))
            .unwrap_or_default();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(title);

        let lines = match self.view.current_item {
            Some(item) => vec![
                Line::default(),
                Line::from(Span::styled(
                    if self.view.is_playing { "▶ Playing" } else { "⏸ Paused" },
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(vec![
                    Span::styled("clip    ", Style::default().fg(Color::DarkGray)),
                    Span::raw(item.video_source.as_str()),
                ]),
                Line::from(vec![
                    Span::styled("poster  ", Style::default().fg(Color::DarkGray)),
                    Span::raw(item.poster.as_str()),
                ]),
            ],
            None => vec![Line::from("Nothing to show")],
        };
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(layout.stage, buf);
    }

    fn render_strip(&self, layout: &PanelLayout, buf: &mut Buffer) {
        for (i, (&cell, item)) in layout.controls.iter().zip(self.view.items).enumerate() {
            let active = i == self.view.active_index;
            let style = if active {
                Style::default().fg(Color::White).bg(ACCENT)
            } else {
                Style::default().fg(Color::Gray)
            };
            let border = if active {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Paragraph::new(item.label.as_str())
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered().border_style(border))
                .render(cell, buf);
        }

        let icon = if self.view.is_playing { "⏸" } else { "▶" };
        Paragraph::new(icon)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_type(BorderType::Rounded))
            .render(layout.play, buf);

        LineGauge::default()
            .ratio(f64::from(self.progress.clamp(0.0, 1.0)))
            .filled_style(Style::default().fg(ACCENT))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .render(layout.gauge, buf);
    }
}

impl Widget for ShowcasePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::new()
            .style(Style::default().bg(Color::Black))
            .render(area, buf);
        let layout = self.layout(area);
        self.render_rail(&layout, buf);
        self.render_stage(&layout, buf);
        self.render_strip(&layout, buf);
    }
}

/// Translate a key press into a showcase action while the panel has focus.
pub fn showcase_action(
    event: &TuiEvent,
    view: &ShowcaseView<'_>,
    groups: &[Group],
) -> Option<Action> {
    let count = view.items.len();
    match event {
        TuiEvent::CursorLeft => view
            .active_index
            .checked_sub(1)
            .map(Action::ControlSelected),
        TuiEvent::CursorRight => {
            let next = view.active_index + 1;
            (next < count).then_some(Action::ControlSelected(next))
        }
        TuiEvent::InputChar(' ') | TuiEvent::Submit => Some(Action::PlayPauseToggled),
        TuiEvent::InputChar(c) => {
            if let Some(digit) = c.to_digit(10)
                && digit >= 1
                && (digit as usize) <= count
            {
                return Some(Action::ControlSelected(digit as usize - 1));
            }
            let lower = c.to_ascii_lowercase();
            groups
                .iter()
                .find(|g| g.hotkey() == lower)
                .map(|&g| Action::GroupSelected(g))
        }
        _ => None,
    }
}
