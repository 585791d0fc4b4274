//! Currency formatting and parsing for the money input.
//!
//! The canonical value of a field is an integer count of cents. Everything the
//! user sees is derived from it:
//!
//! ```text
//!   keystrokes ──strip──▶ RawDigits ──to_cents──▶ AmountCents ──format──▶ "10,50 €"
//!                                                      ▲
//!   "10,50 €" ────────────────parse_display_to_cents───┘
//! ```
//!
//! All conversions are pure and use integer arithmetic, so formatting a
//! concrete amount cannot fail and parsing never goes through floating point.

use serde::Serialize;

use crate::constants::{
    ACCEPTED_SYMBOLS, CENTS_PER_UNIT, CURRENCY_SYMBOL, FRACTION_DIGITS, SYMBOL_SPACE,
};
use crate::domain::{AmountCents, AmountError, Locale, RawDigits, SymbolPosition};

// ============================================================================
// Free Functions
// ============================================================================

/// Check that `input` only holds characters a money field accepts.
///
/// Accepted: ASCII digits, `.`, `,`, whitespace, `€`, `$` and `£`. The check is
/// advisory and drives the invalid marker only. An empty string fails, since
/// there is nothing to match.
#[must_use]
pub fn validate(input: &str) -> bool {
    !input.is_empty()
        && input.chars().all(|c| {
            c.is_ascii_digit()
                || c == '.'
                || c == ','
                || c.is_whitespace()
                || ACCEPTED_SYMBOLS.contains(&c)
        })
}

/// Format `cents` as a EUR amount under `locale`.
///
/// Always two fraction digits, the locale's decimal separator, no grouping.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_currency(AmountCents(1050), &Locale::resolve("en-US")), "€10.50");
/// assert_eq!(format_currency(AmountCents(1050), &Locale::resolve("de-DE")), "10,50\u{a0}€");
/// ```
#[must_use]
pub fn format_currency(cents: AmountCents, locale: &Locale) -> String {
    let number = format!(
        "{}{}{:0width$}",
        cents.units(),
        locale.decimal_separator(),
        cents.fraction(),
        width = FRACTION_DIGITS
    );

    match locale.conventions().symbol_position {
        SymbolPosition::Prefix => format!("{CURRENCY_SYMBOL}{number}"),
        SymbolPosition::PrefixSpaced => format!("{CURRENCY_SYMBOL}{SYMBOL_SPACE}{number}"),
        SymbolPosition::SuffixSpaced => format!("{number}{SYMBOL_SPACE}{CURRENCY_SYMBOL}"),
    }
}

/// Convert a displayed amount back into cents.
///
/// The first `,` is read as the decimal point, then everything that is not a
/// digit or `.` is dropped. The longest leading decimal literal is taken, so a
/// second `.` ends the number. Sub-cent digits round half up.
///
/// # Errors
///
/// * [`AmountError::Unparsable`] when no digits precede or follow the point
/// * [`AmountError::Overflow`] when the value does not fit in `u64` cents
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_display_to_cents("10,50 €"), Ok(AmountCents(1050)));
/// assert_eq!(parse_display_to_cents("€10.50"), Ok(AmountCents(1050)));
/// ```
pub fn parse_display_to_cents(display: &str) -> Result<AmountCents, AmountError> {
    let normalized = display.replacen(',', ".", 1);
    let filtered: String = normalized
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let (integer, fraction) = split_decimal_literal(&filtered);
    if integer.is_empty() && fraction.is_empty() {
        return Err(AmountError::unparsable(display));
    }

    let units: u64 = if integer.is_empty() {
        0
    } else {
        integer
            .parse()
            .map_err(|_| AmountError::overflow(integer))?
    };

    let mut fraction_digits = fraction.bytes().map(|b| u64::from(b - b'0'));
    let tenths = fraction_digits.next().unwrap_or(0);
    let hundredths = fraction_digits.next().unwrap_or(0);
    let round_up = fraction_digits.next().is_some_and(|d| d >= 5);

    units
        .checked_mul(CENTS_PER_UNIT)
        .and_then(|c| c.checked_add(tenths * 10 + hundredths + u64::from(round_up)))
        .map(AmountCents)
        .ok_or_else(|| AmountError::overflow(filtered.clone()))
}

/// Split `digits.digits` off the front of a string of digits and dots.
fn split_decimal_literal(s: &str) -> (&str, &str) {
    let integer_end = s.find('.').unwrap_or(s.len());
    let integer = &s[..integer_end];
    let rest = &s[integer_end..];

    let fraction = rest.strip_prefix('.').map_or("", |after_point| {
        let end = after_point.find('.').unwrap_or(after_point.len());
        &after_point[..end]
    });
    (integer, fraction)
}

// ============================================================================
// AmountFormatter
// ============================================================================

/// Result of feeding one edit of the field text through the formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditOutcome {
    /// Digits of the edit, the canonical cents as text.
    pub raw: RawDigits,
    /// What the field should show next.
    pub display: String,
    /// Whether the edit text only held accepted characters.
    pub valid: bool,
}

/// Locale-bound conversions between field text and cents.
///
/// This is the call interface a presentation layer drives: it hands in the
/// text of the field on every edit, blur and focus and reads back what to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountFormatter {
    locale: Locale,
}

impl AmountFormatter {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// See [`validate`].
    #[must_use]
    pub fn validate(&self, input: &str) -> bool {
        validate(input)
    }

    /// Remove every non-digit character from `input`.
    #[must_use]
    pub fn strip_to_digits(&self, input: &str) -> RawDigits {
        RawDigits::strip(input)
    }

    /// Parse `digits` as a base-10 cents value; empty digits mean no value.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::Overflow`] for values beyond `u64::MAX` cents.
    pub fn digits_to_cents(&self, digits: &RawDigits) -> Result<Option<AmountCents>, AmountError> {
        digits.to_cents()
    }

    /// See [`format_currency`].
    #[must_use]
    pub fn format_currency(&self, cents: AmountCents) -> String {
        format_currency(cents, &self.locale)
    }

    /// Format a digit string, failing closed to an empty string.
    #[must_use]
    pub fn format_raw(&self, raw: &RawDigits) -> String {
        match raw.to_cents() {
            Ok(Some(cents)) => self.format_currency(cents),
            Ok(None) => String::new(),
            Err(err) => {
                tracing::debug!("Not formatting raw value: {err}");
                String::new()
            }
        }
    }

    /// See [`parse_display_to_cents`].
    ///
    /// # Errors
    ///
    /// Propagates [`AmountError::Unparsable`] and [`AmountError::Overflow`].
    pub fn parse_display_to_cents(&self, display: &str) -> Result<AmountCents, AmountError> {
        parse_display_to_cents(display)
    }

    /// Run one edit of the field text.
    ///
    /// Text without digits clears the value. Clearing the field entirely is
    /// never flagged invalid; any other text is checked with [`validate`].
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::Overflow`] when the digits no longer fit; callers
    /// keep their previous state in that case.
    pub fn on_user_edit(&self, text: &str) -> Result<EditOutcome, AmountError> {
        let valid = text.is_empty() || self.validate(text);
        let raw = self.strip_to_digits(text);

        let display = match self.digits_to_cents(&raw)? {
            Some(cents) => self.format_currency(cents),
            None => String::new(),
        };

        Ok(EditOutcome {
            raw,
            display,
            valid,
        })
    }

    /// Convert the field text to cents when the field loses focus.
    ///
    /// Returns `None` for an empty field or text that holds no number.
    #[must_use]
    pub fn on_field_blur(&self, display_text: &str) -> Option<AmountCents> {
        if display_text.is_empty() {
            return None;
        }
        match self.parse_display_to_cents(display_text) {
            Ok(cents) => Some(cents),
            Err(err) => {
                tracing::debug!("Blur conversion skipped: {err}");
                None
            }
        }
    }

    /// The text to show when the field gains focus.
    #[must_use]
    pub fn on_field_focus(&self, raw: &RawDigits) -> String {
        self.format_raw(raw)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn en_us() -> AmountFormatter {
        AmountFormatter::new(Locale::resolve("en-US"))
    }

    #[fixture]
    fn de_de() -> AmountFormatter {
        AmountFormatter::new(Locale::resolve("de-DE"))
    }

    /// Table-driven tests for the accepted character set.
    #[test]
    fn test_validate() {
        let cases = [
            ("1050", true),
            ("10,50", true),
            ("10.50", true),
            ("€10.50", true),
            ("10,50\u{a0}€", true),
            ("$ 1 000", true),
            ("£3", true),
            ("\t ", true),
            ("", false),
            ("10a", false),
            ("abc", false),
            ("-5", false),
            ("¥100", false),
            ("١٢", false),
        ];

        for (input, expected) in cases {
            assert_eq!(validate(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn own_output_always_validates() {
        for tag in ["en-US", "de-DE", "de-AT", "fr-FR", "nl-NL"] {
            let formatted = format_currency(AmountCents(123_456), &Locale::resolve(tag));
            assert!(validate(&formatted), "{tag}: {formatted:?}");
        }
    }

    #[rstest]
    #[case("en-US", 1050, "€10.50")]
    #[case("en-US", 0, "€0.00")]
    #[case("en-US", 7, "€0.07")]
    #[case("en-US", 123_456_789, "€1234567.89")]
    #[case("de-DE", 1050, "10,50\u{a0}€")]
    #[case("de-AT", 1050, "€\u{a0}10,50")]
    #[case("fr-FR", 99, "0,99\u{a0}€")]
    #[case("nl-NL", 100, "€\u{a0}1,00")]
    #[case("xx-YY", 1050, "€10.50")]
    fn test_format_currency(#[case] tag: &str, #[case] cents: u64, #[case] expected: &str) {
        assert_eq!(
            format_currency(AmountCents(cents), &Locale::resolve(tag)),
            expected
        );
    }

    #[test]
    fn format_currency_has_no_grouping() {
        let formatted = format_currency(AmountCents(100_000_000), &Locale::resolve("en-US"));
        insta::assert_snapshot!(formatted, @"€1000000.00");
    }

    #[test]
    fn format_currency_matches_locale_separator() {
        let de = format_currency(AmountCents(1050), &Locale::resolve("de-DE"));
        assert!(de.contains("10,50"));
        assert!(de.contains('€'));

        let en = format_currency(AmountCents(1050), &Locale::resolve("en-US"));
        assert!(en.contains("10.50"));
    }

    #[rstest]
    #[case("de-CH", "€\u{a0}10.50")]
    #[case("es-MX", "€\u{a0}10.50")]
    #[case("fr-CH", "10.50\u{a0}€")]
    #[case("tr-TR", "€10,50")]
    #[case("en-ZA", "€10,50")]
    #[case("nb-NO", "10,50\u{a0}€")]
    #[case("hu-HU", "10,50\u{a0}€")]
    #[case("ro-RO", "10,50\u{a0}€")]
    #[case("bg-BG", "10,50\u{a0}€")]
    fn format_currency_uses_regional_separator(#[case] tag: &str, #[case] expected: &str) {
        let locale = Locale::resolve(tag);
        let formatted = format_currency(AmountCents(1050), &locale);
        assert_eq!(formatted, expected);
        assert_eq!(parse_display_to_cents(&formatted), Ok(AmountCents(1050)));
    }

    /// Table-driven tests for display parsing.
    #[test]
    fn test_parse_display_to_cents() {
        let cases = [
            ("10,50", Ok(AmountCents(1050))),
            ("10.50", Ok(AmountCents(1050))),
            ("€10.50", Ok(AmountCents(1050))),
            ("10,50\u{a0}€", Ok(AmountCents(1050))),
            ("1050", Ok(AmountCents(105_000))),
            ("0,07", Ok(AmountCents(7))),
            (".5", Ok(AmountCents(50))),
            ("5.", Ok(AmountCents(500))),
            ("10.505", Ok(AmountCents(1051))),
            ("10.504", Ok(AmountCents(1050))),
            ("0.005", Ok(AmountCents(1))),
            ("1.2.3", Ok(AmountCents(120))),
            // only the first comma is a decimal point, later ones vanish
            ("1,234,56", Ok(AmountCents(123))),
            ("$ 3", Ok(AmountCents(300))),
            ("", Err(AmountError::unparsable(""))),
            ("€", Err(AmountError::unparsable("€"))),
            (".", Err(AmountError::unparsable("."))),
            ("abc", Err(AmountError::unparsable("abc"))),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_display_to_cents(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn parse_display_reports_overflow() {
        assert!(matches!(
            parse_display_to_cents("99999999999999999999"),
            Err(AmountError::Overflow { .. })
        ));
        assert!(matches!(
            parse_display_to_cents("184467440737095516.15"),
            Ok(AmountCents(u64::MAX))
        ));
        assert!(matches!(
            parse_display_to_cents("184467440737095516.16"),
            Err(AmountError::Overflow { .. })
        ));
    }

    #[rstest]
    #[case("en-US")]
    #[case("de-DE")]
    #[case("de-AT")]
    #[case("fr-FR")]
    #[case("nl-NL")]
    fn format_then_parse_round_trips(#[case] tag: &str) {
        let formatter = AmountFormatter::new(Locale::resolve(tag));
        for typed in ["1", "1050", "€ 10,50", "000", "99999", "18446744073709551615"] {
            let digits = formatter.strip_to_digits(typed);
            let cents = formatter
                .digits_to_cents(&digits)
                .unwrap()
                .expect("digits present");
            let display = formatter.format_currency(cents);
            assert_eq!(
                formatter.parse_display_to_cents(&display),
                Ok(cents),
                "{tag}: {display:?}"
            );
        }
    }

    #[rstest]
    fn edit_formats_running_value(de_de: AmountFormatter) {
        let outcome = de_de.on_user_edit("1050").unwrap();
        assert_eq!(outcome.raw.as_str(), "1050");
        assert_eq!(outcome.display, "10,50\u{a0}€");
        assert!(outcome.valid);
    }

    #[rstest]
    fn edit_to_empty_clears_without_flagging(en_us: AmountFormatter) {
        let outcome = en_us.on_user_edit("").unwrap();
        assert!(outcome.raw.is_empty());
        assert!(outcome.display.is_empty());
        assert!(outcome.valid);
    }

    #[rstest]
    fn edit_with_letters_is_flagged_but_kept(en_us: AmountFormatter) {
        let outcome = en_us.on_user_edit("12x").unwrap();
        assert!(!outcome.valid);
        assert_eq!(outcome.raw.as_str(), "12");
        assert_eq!(outcome.display, "€0.12");

        let only_letters = en_us.on_user_edit("abc").unwrap();
        assert!(!only_letters.valid);
        assert!(only_letters.display.is_empty());
    }

    #[rstest]
    fn edit_overflow_is_an_error(en_us: AmountFormatter) {
        assert!(matches!(
            en_us.on_user_edit("123456789012345678901234"),
            Err(AmountError::Overflow { .. })
        ));
    }

    #[rstest]
    fn blur_converts_or_skips(de_de: AmountFormatter) {
        assert_eq!(de_de.on_field_blur("10,50\u{a0}€"), Some(AmountCents(1050)));
        assert_eq!(de_de.on_field_blur(""), None);
        assert_eq!(de_de.on_field_blur("€"), None);
    }

    #[rstest]
    fn focus_formats_raw_or_nothing(en_us: AmountFormatter) {
        assert_eq!(en_us.on_field_focus(&RawDigits::strip("1050")), "€10.50");
        assert_eq!(en_us.on_field_focus(&RawDigits::strip("")), "");
        assert_eq!(
            en_us.on_field_focus(&RawDigits::strip("123456789012345678901234")),
            ""
        );
    }
}
