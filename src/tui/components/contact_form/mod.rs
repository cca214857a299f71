//! # Contact Form Component
//!
//! Renders the enquiry form and edits whichever field has focus.
//!
//! ## State Management
//!
//! Field values, errors and the submitting flag live in the core
//! `ContactForm`. The `FormEditor` here only holds presentation state:
//! which field is being edited, a working copy of its text, and the cursor.
//! Every edit is emitted as `FormEvent::Changed` so the core stays the source
//! of truth; `sync()` pulls the value back when the core changes it (e.g. the
//! reset after a successful submission).

mod text_wrap;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use crate::core::contact::{ContactFields, ContactForm, Field, Notice};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

use text_wrap::{
    VERTICAL_OVERHEAD, inner_width, next_char_boundary, prev_char_boundary, tail_fitting,
    wrapped_tail,
};

const FIELD_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 5;
const ERROR_HEIGHT: u16 = 1;
const SUBMIT_HEIGHT: u16 = 3;
const SUBMIT_WIDTH: u16 = 16;
const NOTICE_HEIGHT: u16 = 1;
const CURSOR: char = '▏';

/// Rows the form needs regardless of width.
pub const FORM_HEIGHT: u16 =
    3 * (FIELD_HEIGHT + ERROR_HEIGHT) + MESSAGE_HEIGHT + ERROR_HEIGHT + SUBMIT_HEIGHT + NOTICE_HEIGHT;

/// High-level events emitted by the editor
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The focused field has a new value.
    Changed { field: Field, value: String },
    /// Enter pressed in a single-line field.
    Submit,
}

/// Editing state for the focused field.
#[derive(Debug, Default)]
pub struct FormEditor {
    field: Option<Field>,
    buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    cursor: usize,
}

impl FormEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self) -> Option<Field> {
        self.field
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Start editing `field`, cursor at the end of `value`.
    pub fn focus(&mut self, field: Field, value: &str) {
        self.field = Some(field);
        self.buffer = value.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn blur(&mut self) {
        self.field = None;
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Pick up changes made to the form outside the editor.
    pub fn sync(&mut self, fields: &ContactFields) {
        let Some(field) = self.field else {
            return;
        };
        let current = fields.get(field);
        if self.buffer != current {
            self.buffer = current.to_string();
            self.cursor = self.cursor.min(self.buffer.len());
            while !self.buffer.is_char_boundary(self.cursor) {
                self.cursor -= 1;
            }
        }
    }

    fn changed(&self, field: Field) -> Option<FormEvent> {
        Some(FormEvent::Changed {
            field,
            value: self.buffer.clone(),
        })
    }
}

impl EventHandler for FormEditor {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let field = self.field?;
        match event {
            TuiEvent::InputChar('\n') if !field.is_multiline() => None,
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed(field)
            }
            TuiEvent::Paste(text) => {
                let text = if field.is_multiline() {
                    text.clone()
                } else {
                    text.replace(['\r', '\n'], " ")
                };
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed(field)
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed(field)
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed(field)
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::Submit if field.is_multiline() => {
                self.buffer.insert(self.cursor, '\n');
                self.cursor += 1;
                self.changed(field)
            }
            TuiEvent::Submit => Some(FormEvent::Submit),
            _ => None,
        }
    }
}

/// Where each part of the form sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub fields: Vec<(Field, Rect)>,
    pub errors: Vec<(Field, Rect)>,
    pub submit: Rect,
    pub notice: Rect,
}

impl FormLayout {
    pub fn compute(area: Rect) -> Self {
        let mut rows = Vec::new();
        for field in Field::ALL {
            let height = if field.is_multiline() {
                MESSAGE_HEIGHT
            } else {
                FIELD_HEIGHT
            };
            rows.push(Constraint::Length(height));
            rows.push(Constraint::Length(ERROR_HEIGHT));
        }
        rows.push(Constraint::Length(SUBMIT_HEIGHT));
        rows.push(Constraint::Length(NOTICE_HEIGHT));
        rows.push(Constraint::Min(0));
        let cells = Layout::vertical(rows).split(area);

        let fields = Field::ALL
            .iter()
            .enumerate()
            .map(|(i, &f)| (f, cells[2 * i]))
            .collect();
        let errors = Field::ALL
            .iter()
            .enumerate()
            .map(|(i, &f)| (f, cells[2 * i + 1]))
            .collect();
        let base = 2 * Field::ALL.len();
        let submit_row = cells[base];
        Self {
            fields,
            errors,
            submit: Rect {
                width: submit_row.width.min(SUBMIT_WIDTH),
                ..submit_row
            },
            notice: cells[base + 1],
        }
    }
}

/// Which part of the form has focus, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(Field),
    Submit,
}

pub struct ContactFormView<'a> {
    pub form: &'a ContactForm,
    pub editor: &'a FormEditor,
    pub focus: Option<FormFocus>,
}

impl ContactFormView<'_> {
    /// Text to show for `field`, with the cursor drawn in when editing.
    fn display_text(&self, field: Field) -> String {
        let value = self.form.fields.get(field);
        if self.focus == Some(FormFocus::Field(field)) && self.editor.field() == Some(field) {
            let cursor = self.editor.cursor().min(value.len());
            if value.is_char_boundary(cursor) {
                let mut text = value.to_string();
                text.insert(cursor, CURSOR);
                return text;
            }
        }
        value.to_string()
    }

    fn render_field(&self, field: Field, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Some(FormFocus::Field(field));
        let has_error = self.form.errors.get(field).is_some();
        let border = match (focused, has_error) {
            (true, _) => Style::default().fg(Color::White),
            (false, true) => Style::default().fg(Color::LightRed),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let title = if field.is_required() {
            format!(" {} ", field.placeholder())
        } else {
            format!(" {} (optional) ", field.placeholder())
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(title, border));

        let text = self.display_text(field);
        let width = inner_width(area.width);
        let lines: Vec<Line> = if field.is_multiline() {
            let max_lines = area.height.saturating_sub(VERTICAL_OVERHEAD);
            wrapped_tail(&text, width, max_lines)
                .into_iter()
                .map(Line::from)
                .collect()
        } else {
            vec![Line::from(tail_fitting(&text, width).to_string())]
        };

        Paragraph::new(lines)
            .block(block.padding(ratatui::widgets::Padding::horizontal(1)))
            .style(Style::default().fg(Color::White))
            .render(area, buf);
    }
}

impl Widget for ContactFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = FormLayout::compute(area);

        for &(field, rect) in &layout.fields {
            self.render_field(field, rect, buf);
        }
        for &(field, rect) in &layout.errors {
            if let Some(message) = self.form.errors.get(field) {
                Span::styled(message, Style::default().fg(Color::LightRed)).render(rect, buf);
            }
        }

        let submit_style = match (self.form.submitting, self.focus == Some(FormFocus::Submit)) {
            (true, _) => Style::default().fg(Color::DarkGray),
            (false, true) => Style::default()
                .fg(Color::Rgb(0, 108, 188))
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            (false, false) => Style::default().fg(Color::White),
        };
        Paragraph::new(self.form.submit_label())
            .alignment(ratatui::layout::Alignment::Center)
            .style(submit_style)
            .block(Block::bordered().border_type(BorderType::Rounded))
            .render(layout.submit, buf);

        if let Some(notice) = self.form.notice {
            let color = match notice {
                Notice::Sent => Color::LightGreen,
                Notice::Failed => Color::LightRed,
            };
            Span::styled(notice.message(), Style::default().fg(color)).render(layout.notice, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::GENERIC_FAILURE;

    fn text_of(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    fn render(form: &ContactForm, editor: &FormEditor, focus: Option<FormFocus>) -> String {
        let area = Rect::new(0, 0, 50, FORM_HEIGHT);
        let mut buf = Buffer::empty(area);
        ContactFormView { form, editor, focus }.render(area, &mut buf);
        text_of(&buf)
    }

    #[test]
    fn test_typing_emits_changes() {
        let mut editor = FormEditor::new();
        editor.focus(Field::Name, "");

        let res = editor.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(
            res,
            Some(FormEvent::Changed {
                field: Field::Name,
                value: "a".to_string()
            })
        );
        editor.handle_event(&TuiEvent::InputChar('b'));
        editor.handle_event(&TuiEvent::CursorLeft);
        let res = editor.handle_event(&TuiEvent::Backspace);
        assert_eq!(
            res,
            Some(FormEvent::Changed {
                field: Field::Name,
                value: "b".to_string()
            })
        );
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_unfocused_editor_ignores_input() {
        let mut editor = FormEditor::new();
        assert_eq!(editor.handle_event(&TuiEvent::InputChar('a')), None);
    }

    #[test]
    fn test_enter_submits_single_line_but_breaks_message() {
        let mut editor = FormEditor::new();
        editor.focus(Field::Email, "a@b.co");
        assert_eq!(editor.handle_event(&TuiEvent::Submit), Some(FormEvent::Submit));

        editor.focus(Field::Message, "hi");
        assert_eq!(
            editor.handle_event(&TuiEvent::Submit),
            Some(FormEvent::Changed {
                field: Field::Message,
                value: "hi\n".to_string()
            })
        );
    }

    #[test]
    fn test_paste_into_single_line_flattens_newlines() {
        let mut editor = FormEditor::new();
        editor.focus(Field::Company, "");
        let res = editor.handle_event(&TuiEvent::Paste("Acme\nMotors".to_string()));
        assert_eq!(
            res,
            Some(FormEvent::Changed {
                field: Field::Company,
                value: "Acme Motors".to_string()
            })
        );
    }

    #[test]
    fn test_sync_picks_up_reset() {
        let mut editor = FormEditor::new();
        editor.focus(Field::Message, "hello there");
        editor.sync(&ContactFields::default());
        assert_eq!(editor.cursor(), 0);
        assert_eq!(
            editor.handle_event(&TuiEvent::InputChar('x')),
            Some(FormEvent::Changed {
                field: Field::Message,
                value: "x".to_string()
            })
        );
    }

    #[test]
    fn test_errors_render_inline() {
        let mut form = ContactForm::new();
        form.edit(Field::Email, "nope".to_string());
        assert!(form.begin_submit().is_none());

        let text = render(&form, &FormEditor::new(), None);
        assert!(text.contains("Name is required"));
        assert!(text.contains("Email is invalid"));
        assert!(text.contains("Message is required"));
        assert!(text.contains("Company (optional)"));
    }

    #[test]
    fn test_submitting_relabels_button() {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "A".to_string());
        form.edit(Field::Email, "a@b.co".to_string());
        form.edit(Field::Message, "hi".to_string());
        assert!(form.begin_submit().is_some());
        assert!(render(&form, &FormEditor::new(), None).contains("Sending..."));

        form.finish_submit(false);
        let text = render(&form, &FormEditor::new(), Some(FormFocus::Submit));
        assert!(text.contains("Send"));
        assert!(text.contains(GENERIC_FAILURE));
        // Fields survive the failure.
        assert!(text.contains("a@b.co"));
    }

    #[test]
    fn test_layout_fills_form_height() {
        let layout = FormLayout::compute(Rect::new(0, 0, 40, FORM_HEIGHT));
        assert_eq!(layout.fields.len(), 4);
        assert_eq!(layout.notice.bottom(), FORM_HEIGHT);
        assert_eq!(layout.submit.width, SUBMIT_WIDTH);
    }
}
