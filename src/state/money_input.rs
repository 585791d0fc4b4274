//! State of a single money input field.
//!
//! Every field owns its canonical value and UI flags. The host feeds it edits,
//! blurs and focuses; the field runs them through its [`AmountFormatter`] and
//! updates what it shows.
//!
//! Two texts are tracked separately:
//!
//! - `display`: the formatted value the field publishes as its state
//! - `field`: the text currently sitting in the input box
//!
//! They only differ after a blur, and how they differ depends on the
//! [`BlurStrategy`].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::{AmountCents, RawDigits};
use crate::formatter::AmountFormatter;

// ============================================================================
// Blur Strategy
// ============================================================================

/// Where the cents computed on blur end up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BlurStrategy {
    /// Write the cents straight into the input box, leaving the published
    /// display untouched.
    #[default]
    WriteField,
    /// Publish the cents as the new display value; the box mirrors it.
    Republish,
}

impl BlurStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WriteField => "write-field",
            Self::Republish => "republish",
        }
    }
}

// ============================================================================
// MoneyInputState
// ============================================================================

/// One money input: canonical cents, formatted display and UI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyInputState {
    label: String,
    formatter: AmountFormatter,
    blur_strategy: BlurStrategy,
    disabled: bool,
    raw: RawDigits,
    display: String,
    field: String,
    valid: bool,
    focused: bool,
}

impl MoneyInputState {
    /// Create an empty, enabled field.
    #[must_use]
    pub fn new(label: impl Into<String>, formatter: AmountFormatter) -> Self {
        Self {
            label: label.into(),
            formatter,
            blur_strategy: BlurStrategy::default(),
            disabled: false,
            raw: RawDigits::default(),
            display: String::new(),
            field: String::new(),
            valid: true,
            focused: false,
        }
    }

    #[must_use]
    pub fn with_blur_strategy(mut self, strategy: BlurStrategy) -> Self {
        self.blur_strategy = strategy;
        self
    }

    /// Make the field read-only. Disabled fields keep showing their last display.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Seed the field with a value, as if the user had typed it.
    #[must_use]
    pub fn with_amount(mut self, cents: AmountCents) -> Self {
        self.raw = RawDigits::from(cents);
        self.display = self.formatter.format_currency(cents);
        self.field = self.display.clone();
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn raw(&self) -> &RawDigits {
        &self.raw
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub const fn blur_strategy(&self) -> BlurStrategy {
        self.blur_strategy
    }

    #[must_use]
    pub fn formatter(&self) -> &AmountFormatter {
        &self.formatter
    }

    /// The text a renderer should put in the box.
    #[must_use]
    pub fn shown_text(&self) -> &str {
        if self.disabled {
            &self.display
        } else {
            &self.field
        }
    }

    /// Current canonical value, `None` while nothing is entered.
    #[must_use]
    pub fn cents(&self) -> Option<AmountCents> {
        self.raw.to_cents().ok().flatten()
    }

    // ------------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------------

    /// Apply a change of the box text.
    ///
    /// Returns `false` when the edit was ignored, either because the field is
    /// disabled or because the digits no longer fit in a cents value.
    pub fn edit(&mut self, text: &str) -> bool {
        if self.disabled {
            return false;
        }

        match self.formatter.on_user_edit(text) {
            Ok(outcome) => {
                self.valid = outcome.valid;
                self.raw = outcome.raw;
                self.display = outcome.display;
                self.field = self.display.clone();
                true
            }
            Err(err) => {
                tracing::debug!(label = %self.label, "Edit rejected: {err}");
                false
            }
        }
    }

    pub fn push_char(&mut self, c: char) -> bool {
        let text = format!("{}{c}", self.field);
        self.edit(&text)
    }

    pub fn paste(&mut self, pasted: &str) -> bool {
        let text = format!("{}{pasted}", self.field);
        self.edit(&text)
    }

    /// Remove the last significant digit.
    ///
    /// The cursor sits at the end of the box, behind the symbol for suffix
    /// locales, and formatting pads with zeros. Deleting box characters would
    /// not shrink the value, so the digit sequence is edited instead.
    pub fn backspace(&mut self) -> bool {
        let digits = RawDigits::strip(&self.field);
        let mut remaining = digits.as_str().trim_start_matches('0').to_string();
        remaining.pop();
        self.edit(&remaining)
    }

    pub fn clear(&mut self) -> bool {
        self.edit("")
    }

    /// Handle the field losing focus.
    ///
    /// Returns the cents read back from the box, or `None` when the box was
    /// empty or unparsable. Only a focused field can blur: the box of a blurred
    /// field holds cents, not a display, and must not be read back again.
    pub fn blur(&mut self) -> Option<AmountCents> {
        if self.disabled || !self.focused {
            return None;
        }
        self.focused = false;

        let cents = self.formatter.on_field_blur(&self.field)?;
        tracing::debug!(
            label = %self.label,
            %cents,
            strategy = self.blur_strategy.as_str(),
            "Field blurred"
        );

        match self.blur_strategy {
            BlurStrategy::WriteField => {
                self.field = cents.to_string();
            }
            BlurStrategy::Republish => {
                self.display = cents.to_string();
                self.field = self.display.clone();
            }
        }
        Some(cents)
    }

    /// Handle the field gaining focus: show the formatted canonical value.
    pub fn focus(&mut self) {
        if self.disabled {
            return;
        }
        self.focused = true;

        self.field = self.formatter.on_field_focus(&self.raw);
        if self.blur_strategy == BlurStrategy::Republish {
            self.display = self.field.clone();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
