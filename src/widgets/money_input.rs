//! Money input widget.
//!
//! Renders one [`MoneyInputState`] as a bordered text box:
//!
//! ```text
//! ╭ Amount ──────────────────────╮
//! │ 10,50 €▏                     │
//! ╰─────────── invalid characters╯
//! ```
//!
//! The border reflects the field's flags: focused, invalid or disabled.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::state::MoneyInputState;
use crate::theme::{
    BORDER_STYLE, DISABLED_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE, INVALID_STYLE,
    MUTED_COLOR,
};

/// Cursor glyph appended to the focused field.
const CURSOR: &str = "▏";

/// Hint shown under a field that holds rejected characters.
const INVALID_HINT: &str = " invalid characters ";

/// Hint shown under a read-only field.
const READ_ONLY_HINT: &str = " read-only ";

// ============================================================================
// MoneyInput Widget
// ============================================================================

/// Renders a money field from its state.
///
/// # Usage
///
/// ```ignore
/// frame.render_widget(MoneyInput::new(&state), area);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MoneyInput<'a> {
    state: &'a MoneyInputState,
    placeholder: &'a str,
}

impl<'a> MoneyInput<'a> {
    #[must_use]
    pub const fn new(state: &'a MoneyInputState) -> Self {
        Self {
            state,
            placeholder: "",
        }
    }

    /// Text shown, muted, while the field is empty and unfocused.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    fn block(&self) -> Block<'a> {
        let state = self.state;
        let (border_style, border_set, title_style) = if state.is_disabled() {
            (DISABLED_STYLE, border::PLAIN, DISABLED_STYLE)
        } else if !state.is_valid() {
            (INVALID_STYLE, border::ROUNDED, INVALID_STYLE)
        } else if state.is_focused() {
            (FOCUSED_BORDER_STYLE, border::DOUBLE, FOCUSED_TITLE_STYLE)
        } else {
            (BORDER_STYLE, border::ROUNDED, Style::default())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", state.label()), title_style));

        if state.is_disabled() {
            block.title_bottom(Line::from(READ_ONLY_HINT).alignment(Alignment::Right))
        } else if !state.is_valid() {
            block.title_bottom(
                Line::styled(INVALID_HINT, INVALID_STYLE).alignment(Alignment::Right),
            )
        } else {
            block
        }
    }

    /// The single content line of the box.
    #[must_use]
    pub fn to_line(&self) -> Line<'a> {
        let state = self.state;
        let text = state.shown_text();

        if state.is_disabled() {
            return Line::from(Span::styled(text.to_string(), DISABLED_STYLE));
        }
        if text.is_empty() && !state.is_focused() {
            return Line::from(Span::styled(
                self.placeholder.to_string(),
                Style::default().fg(MUTED_COLOR),
            ));
        }

        let mut spans = vec![Span::raw(text.to_string())];
        if state.is_focused() {
            spans.push(Span::styled(CURSOR, FOCUSED_BORDER_STYLE));
        }
        Line::from(spans)
    }
}

impl Widget for MoneyInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        Paragraph::new(self.to_line())
            .block(self.block())
            .render(area, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AmountCents, Locale};
    use crate::formatter::AmountFormatter;
    use crate::test_utils::{buffer_text, test_terminal_40x3};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::*;

    fn state(tag: &str) -> MoneyInputState {
        MoneyInputState::new("Amount", AmountFormatter::new(Locale::resolve(tag)))
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn focused_line_has_cursor() {
        let mut field = state("en-US");
        field.focus();
        field.push_char('5');

        assert_eq!(line_text(&MoneyInput::new(&field).to_line()), "€0.05▏");
    }

    #[test]
    fn unfocused_empty_line_shows_placeholder() {
        let field = state("en-US");
        let line = MoneyInput::new(&field).placeholder("0.00").to_line();
        assert_eq!(line_text(&line), "0.00");
    }

    #[test]
    fn disabled_line_shows_last_display() {
        let field = state("de-DE")
            .with_amount(AmountCents(1999))
            .with_disabled(true);
        assert_eq!(line_text(&MoneyInput::new(&field).to_line()), "19,99\u{a0}€");
    }

    #[rstest]
    fn renders_label_and_value(test_terminal_40x3: Terminal<TestBackend>) {
        let mut terminal = test_terminal_40x3;
        let mut field = state("en-US");
        field.focus();
        for c in "1050".chars() {
            field.push_char(c);
        }

        terminal
            .draw(|f| f.render_widget(MoneyInput::new(&field), f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Amount"), "{text:?}");
        assert!(text.contains("€10.50"), "{text:?}");
        assert!(!text.contains("invalid"), "{text:?}");
    }

    #[rstest]
    fn renders_invalid_hint(test_terminal_40x3: Terminal<TestBackend>) {
        let mut terminal = test_terminal_40x3;
        let mut field = state("en-US");
        field.focus();
        field.push_char('1');
        field.push_char('x');

        terminal
            .draw(|f| f.render_widget(MoneyInput::new(&field), f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("invalid characters"), "{text:?}");
        assert!(text.contains("€0.01"), "{text:?}");
    }

    #[rstest]
    fn renders_read_only_hint(test_terminal_40x3: Terminal<TestBackend>) {
        let mut terminal = test_terminal_40x3;
        let field = state("en-US")
            .with_amount(AmountCents(100))
            .with_disabled(true);

        terminal
            .draw(|f| f.render_widget(MoneyInput::new(&field), f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("read-only"), "{text:?}");
        assert!(text.contains("€1.00"), "{text:?}");
    }

    #[test]
    fn zero_area_renders_nothing() {
        let field = state("en-US");
        let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
        MoneyInput::new(&field).render(Rect::new(0, 0, 0, 0), &mut buf);
        assert!(buf.content().is_empty());
    }
}
