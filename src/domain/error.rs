//! Error types for amount conversion.
//!
//! Conversion failures are never fatal: callers on the widget path degrade to an
//! empty or unchanged display. The typed errors exist so the pure conversion
//! functions can say *why* they produced nothing.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error produced when text cannot be turned into an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The text holds no numeric value after normalization.
    #[error("Unparsable amount: '{input}'")]
    Unparsable {
        /// The text as it was handed to the parser.
        input: String,
    },

    /// The digits describe more cents than fit in a `u64`.
    #[error("Amount too large: {digits} cents")]
    Overflow {
        /// The offending digit string.
        digits: String,
    },

    /// A locale tag that has no known numeral conventions.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

impl AmountError {
    /// Create a new unparsable-input error.
    ///
    /// # Arguments
    ///
    /// * `input` - The text that failed to parse
    ///
    /// # Returns
    ///
    /// A new `AmountError::Unparsable` variant.
    #[must_use]
    pub fn unparsable(input: impl Into<String>) -> Self {
        Self::Unparsable {
            input: input.into(),
        }
    }

    /// Create a new overflow error.
    #[must_use]
    pub fn overflow(digits: impl Into<String>) -> Self {
        Self::Overflow {
            digits: digits.into(),
        }
    }

    /// Create a new unknown locale error.
    #[must_use]
    pub fn unknown_locale(tag: impl Into<String>) -> Self {
        Self::UnknownLocale(tag.into())
    }

    /// Convert to a `color_eyre::Report` for the binary's error plumbing.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_error_display() {
        let cases = [
            (AmountError::unparsable("abc"), "Unparsable amount: 'abc'"),
            (
                AmountError::overflow("99999999999999999999999"),
                "Amount too large: 99999999999999999999999 cents",
            ),
            (AmountError::unknown_locale("xx-YY"), "Unknown locale: xx-YY"),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_unparsable_error_creation() {
        match AmountError::unparsable("€") {
            AmountError::Unparsable { input } => assert_eq!(input, "€"),
            other => panic!("Expected Unparsable variant, got {other:?}"),
        }
    }

    #[test]
    fn test_into_report_keeps_message() {
        let report = AmountError::overflow("123").into_report();
        assert_eq!(report.to_string(), "Amount too large: 123 cents");
    }
}
