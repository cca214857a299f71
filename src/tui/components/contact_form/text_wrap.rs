//! Pure text helpers for the form fields.
//!
//! Stateless: no dependency on the editor or the form.

/// Border (2) + padding (2) consumed horizontally by a bordered field
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;

/// Build textwrap options for a field's inner width.
fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner content width after border/padding overhead. 0 if too narrow.
pub(super) fn inner_width(field_width: u16) -> u16 {
    field_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrap `text` and keep only the last `max_lines` lines, so the line being
/// typed stays visible.
pub(super) fn wrapped_tail(text: &str, width: u16, max_lines: u16) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let mut lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|l| l.into_owned())
        .collect();
    // textwrap drops the empty line after a trailing newline
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }
    let skip = lines.len().saturating_sub(max_lines as usize);
    lines.split_off(skip)
}

/// For single-line fields: the rightmost slice of `text` that fits `width`
/// columns.
pub(super) fn tail_fitting(text: &str, width: u16) -> &str {
    let mut used = 0usize;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width as usize {
            break;
        }
        used += w;
        start = i;
    }
    &text[start..]
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
