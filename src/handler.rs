use crate::event::Action;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Handles a crossterm event and returns an optional Action.
pub fn handle_event(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_press(key),
        Event::Paste(text) => Some(Action::Paste(text)),
        _ => None,
    }
}

/// Handles key press events.
///
/// Every printable character goes to the focused field, so quitting and
/// clearing live on Esc and Ctrl chords.
fn handle_key_press(key_event: KeyEvent) -> Option<Action> {
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ClearField),
            _ => None,
        };
    }

    match key_event.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Enter | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::ClearField),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}
