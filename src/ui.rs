//! Rendering of the money input form.
//!
//! ```text
//!            ╭ Money Input · de-DE · write-field ╮
//!            │ ╔ Price ═══════════════════════╗  │
//!            │ ║ 10,50 €▏                     ║  │
//!            │ ╚══════════════════════════════╝  │
//!            │ ...                               │
//!            ╰───────────────────────────────────╯
//!       Price published "10,50 €" · box "1050" · raw 1050
//!   Tab next · Shift+Tab prev · Ctrl+U clear · Esc quit
//! ```

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::constants::{CURRENCY_CODE, FIELD_HEIGHT, FORM_WIDTH, HINT_HEIGHT};
use crate::state::MoneyInputState;
use crate::theme::{BORDER_STYLE, FOCUSED_TITLE_STYLE, HINT_STYLE, SUCCESS_COLOR};
use crate::widgets::MoneyInput;

const KEY_HINTS: &str = "Tab next · Shift+Tab prev · Ctrl+U clear · Esc quit";

/// Renders the whole form into the frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let [form_area, published_area, status_area, hint_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(HINT_HEIGHT),
            Constraint::Length(HINT_HEIGHT),
            Constraint::Length(HINT_HEIGHT),
        ])
        .areas(area);

    render_form(app, frame, form_area);
    render_published(app, frame, published_area);
    render_status(app, frame, status_area);

    let hints = Paragraph::new(KEY_HINTS)
        .style(HINT_STYLE)
        .alignment(Alignment::Center);
    frame.render_widget(hints, hint_area);
}

fn form_title(app: &App) -> String {
    let settings = app
        .fields
        .first()
        .map(|field| {
            format!(
                " · {} · {}",
                field.formatter().locale(),
                field.blur_strategy().as_str()
            )
        })
        .unwrap_or_default();
    format!(" Money Input ({CURRENCY_CODE}){settings} ")
}

fn render_form(app: &App, frame: &mut Frame, area: Rect) {
    let field_count = u16::try_from(app.fields.len()).unwrap_or(u16::MAX);
    let height = field_count.saturating_mul(FIELD_HEIGHT).saturating_add(2);
    let width = FORM_WIDTH.min(area.width);
    let form_area = Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        height.min(area.height),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
        .title(Span::styled(form_title(app), FOCUSED_TITLE_STYLE))
        .title_alignment(Alignment::Center);
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            app.fields
                .iter()
                .map(|_| Constraint::Length(FIELD_HEIGHT))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (field, row) in app.fields.iter().zip(rows.iter()) {
        frame.render_widget(MoneyInput::new(field).placeholder(placeholder(field)), *row);
    }
}

/// The zero amount in the field's locale, shown while it is empty.
fn placeholder(field: &MoneyInputState) -> &'static str {
    match field.formatter().locale().decimal_separator() {
        ',' => "0,00",
        _ => "0.00",
    }
}

/// What the last blurred field published next to what its box holds.
///
/// Both are equal under `republish`; under `write-field` the box holds cents
/// while the display keeps the formatted amount.
fn render_published(app: &App, frame: &mut Frame, area: Rect) {
    let Some(field) = app.last_blurred_field().filter(|field| !field.is_focused()) else {
        return;
    };

    let line = Line::from(vec![
        Span::raw(format!("{} ", field.label())),
        Span::styled("published ", HINT_STYLE),
        Span::raw(format!("\"{}\"", field.display())),
        Span::styled(" · box ", HINT_STYLE),
        Span::raw(format!("\"{}\"", field.field())),
        Span::styled(" · raw ", HINT_STYLE),
        Span::raw(field.raw().to_string()),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        area,
    );
}

fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    if let Some(idx) = app.focused
        && let Some(field) = app.focused_field()
    {
        let current = field
            .cents()
            .map_or_else(|| "-".to_string(), |cents| format!("{cents} cents"));
        spans.push(Span::raw(format!("{}: {current}", field.label())));

        if let Some(committed) = app.committed.get(idx).copied().flatten() {
            spans.push(Span::styled(
                format!("  (last committed {committed})"),
                HINT_STYLE,
            ));
        }
        spans.push(Span::raw("  ·  "));
    }

    let total = app.total();
    spans.push(Span::styled(
        format!("Total: {total} cents"),
        Style::default().fg(SUCCESS_COLOR),
    ));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
