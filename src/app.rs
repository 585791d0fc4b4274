//! The demo form hosting one or more money fields.
//!
//! The app plays the presentation layer for [`MoneyInputState`]: it routes
//! actions to the focused field and turns focus changes into blur/focus
//! events. Disabled fields are skipped when cycling focus.

use crate::domain::AmountCents;
use crate::event::Action;
use crate::state::{AppConfig, MoneyInputState};

/// Focus area of the form: the index of the field being edited.
#[derive(Debug)]
pub struct App {
    pub fields: Vec<MoneyInputState>,
    pub focused: Option<usize>,
    /// Cents each field reported on its last blur.
    pub committed: Vec<Option<AmountCents>>,
    /// The field that most recently blurred with a value.
    pub last_blurred: Option<usize>,
    pub exit: bool,
}

impl App {
    /// Build the form from `config` and focus the first editable field.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let fields = config.build_fields();
        let committed = vec![None; fields.len()];
        let mut app = Self {
            fields,
            focused: None,
            committed,
            last_blurred: None,
            exit: false,
        };
        app.focus_step(true);
        app
    }

    /// Apply one action to the form.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.blur_focused();
                self.exit = true;
            }
            Action::Input(c) => {
                if let Some(field) = self.focused_field_mut() {
                    field.push_char(c);
                }
            }
            Action::Backspace => {
                if let Some(field) = self.focused_field_mut() {
                    field.backspace();
                }
            }
            Action::ClearField => {
                if let Some(field) = self.focused_field_mut() {
                    field.clear();
                }
            }
            Action::Paste(text) => {
                if let Some(field) = self.focused_field_mut() {
                    field.paste(&text);
                }
            }
            Action::FocusNext => self.focus_step(true),
            Action::FocusPrev => self.focus_step(false),
        }
    }

    #[must_use]
    pub fn focused_field(&self) -> Option<&MoneyInputState> {
        self.focused.and_then(|idx| self.fields.get(idx))
    }

    #[must_use]
    pub fn last_blurred_field(&self) -> Option<&MoneyInputState> {
        self.last_blurred.and_then(|idx| self.fields.get(idx))
    }

    fn focused_field_mut(&mut self) -> Option<&mut MoneyInputState> {
        self.focused.and_then(|idx| self.fields.get_mut(idx))
    }

    /// Sum of every field's current value, saturating at `u64::MAX`.
    #[must_use]
    pub fn total(&self) -> AmountCents {
        self.fields
            .iter()
            .filter_map(MoneyInputState::cents)
            .fold(AmountCents(0), |acc, cents| {
                AmountCents(acc.value().saturating_add(cents.value()))
            })
    }

    fn blur_focused(&mut self) {
        if let Some(idx) = self.focused
            && let Some(field) = self.fields.get_mut(idx)
        {
            let cents = field.blur();
            if cents.is_some() {
                self.committed[idx] = cents;
                self.last_blurred = Some(idx);
            }
        }
    }

    /// Blur the current field and focus the next editable one in `forward`
    /// direction, wrapping around.
    fn focus_step(&mut self, forward: bool) {
        let len = self.fields.len();
        if len == 0 {
            return;
        }
        self.blur_focused();

        let start = self.focused.unwrap_or(if forward { len - 1 } else { 0 });
        let next = (1..=len)
            .map(|offset| {
                if forward {
                    (start + offset) % len
                } else {
                    (start + len - offset % len) % len
                }
            })
            .find(|&idx| !self.fields[idx].is_disabled());

        self.focused = next;
        if let Some(field) = self.focused_field_mut() {
            field.focus();
        }
    }
}
