//! # Contact Section
//!
//! "Get in touch": company contact details on the left, the enquiry form on
//! the right. On narrow screens the details stack above the form.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use crate::core::contact::ContactForm;
use crate::tui::components::contact_form::{ContactFormView, FORM_HEIGHT, FormEditor, FormFocus, FormLayout};

pub const TITLE: &str = "Get in touch";
pub const SUBTITLE: &str = "For general enquiries";
pub const ADDRESS: [&str; 2] = ["110, 16th Road, Chembur,", "Mumbai - 400071"];
pub const PHONE: &str = "+91 22 25208822";
pub const EMAIL: &str = "info@supremegroup.co.in";

const BACKGROUND: Color = Color::Rgb(0, 108, 188);
const INFO_HEIGHT: u16 = 11;
const PADDING_Y: u16 = 1;
const PADDING_X: u16 = 2;

pub fn required_height(mobile: bool) -> u16 {
    let body = if mobile {
        INFO_HEIGHT + FORM_HEIGHT
    } else {
        INFO_HEIGHT.max(FORM_HEIGHT)
    };
    body + 2 * PADDING_Y
}

/// Split the section into the details column and the form column.
pub fn split(area: Rect, mobile: bool) -> (Rect, Rect) {
    let inner = Block::new()
        .padding(Padding::new(PADDING_X, PADDING_X, PADDING_Y, PADDING_Y))
        .inner(area);
    if mobile {
        let [info, form] =
            Layout::vertical([Constraint::Length(INFO_HEIGHT), Constraint::Length(FORM_HEIGHT)])
                .areas(inner);
        (info, form)
    } else {
        let [info, _, form] = Layout::horizontal([
            Constraint::Percentage(45),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(inner);
        (info, form)
    }
}

/// The form's layout inside a section placed at `area`, for hit testing.
pub fn form_layout(area: Rect, mobile: bool) -> FormLayout {
    let (_, form) = split(area, mobile);
    FormLayout::compute(form)
}

pub struct ContactSection<'a> {
    pub form: &'a ContactForm,
    pub editor: &'a FormEditor,
    pub focus: Option<FormFocus>,
    pub mobile: bool,
}

fn details() -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("──────", Style::default().fg(Color::White))),
        Line::from(SUBTITLE),
        Line::default(),
    ];
    lines.extend(ADDRESS.iter().map(|l| Line::from(*l)));
    lines.push(Line::default());
    lines.push(Line::from(vec![Span::styled("Phone  ", label), Span::raw(PHONE)]));
    lines.push(Line::from(vec![Span::styled("Email  ", label), Span::raw(EMAIL)]));
    lines
}

impl Widget for ContactSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::new()
            .style(Style::default().fg(Color::White).bg(BACKGROUND))
            .render(area, buf);

        let (info, form) = split(area, self.mobile);
        Paragraph::new(details()).render(info, buf);
        ContactFormView {
            form: self.form,
            editor: self.editor,
            focus: self.focus,
        }
        .render(form, buf);
    }
}
