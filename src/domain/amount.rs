//! Amount value types.
//!
//! [`RawDigits`] is what the user typed with everything but digits removed.
//! [`AmountCents`] is the canonical integer value in minor units.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AmountError;
use crate::constants::CENTS_PER_UNIT;

// ============================================================================
// RawDigits
// ============================================================================

/// A string holding only the ASCII digits `0`-`9`, possibly empty.
///
/// The invariant is enforced by construction: the only way in is
/// [`RawDigits::strip`], which discards every other character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RawDigits(String);

impl RawDigits {
    /// Keep the decimal digits of `input`, dropping everything else.
    ///
    /// # Example
    ///
    /// ```ignore
    /// assert_eq!(RawDigits::strip("€10,50").as_str(), "1050");
    /// ```
    #[must_use]
    pub fn strip(input: &str) -> Self {
        Self(input.chars().filter(char::is_ascii_digit).collect())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpret the digits as a base-10 cents value.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` when no digits were entered
    /// * `Ok(Some(cents))` for a value that fits in `u64`
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::Overflow`] when the digits exceed `u64::MAX`.
    pub fn to_cents(&self) -> Result<Option<AmountCents>, AmountError> {
        if self.is_empty() {
            return Ok(None);
        }
        // Leading zeros are fine for u64 parsing, and the string holds digits only,
        // so the sole failure mode left is overflow.
        self.0
            .parse::<u64>()
            .map(|value| Some(AmountCents(value)))
            .map_err(|_| AmountError::overflow(self.0.clone()))
    }
}

impl fmt::Display for RawDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AmountCents> for RawDigits {
    fn from(cents: AmountCents) -> Self {
        Self(cents.0.to_string())
    }
}

// ============================================================================
// AmountCents
// ============================================================================

/// An amount in minor currency units (1/100 EUR).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AmountCents(pub u64);

impl AmountCents {
    /// Whole currency units (euros).
    #[must_use]
    pub const fn units(self) -> u64 {
        self.0 / CENTS_PER_UNIT
    }

    /// The remaining minor units, always below 100.
    #[must_use]
    pub const fn fraction(self) -> u64 {
        self.0 % CENTS_PER_UNIT
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for AmountCents {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for AmountCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("1050", "1050")]
    #[case("€10,50", "1050")]
    #[case("$ 1.234,56", "123456")]
    #[case("abc", "")]
    #[case("0007", "0007")]
    #[case("١٢٣", "")]
    fn strip_keeps_only_ascii_digits(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(RawDigits::strip(input).as_str(), expected);
    }

    #[test]
    fn strip_is_identity_on_digit_strings() {
        for digits in ["0", "1", "42", "1050", "000", "18446744073709551615"] {
            assert_eq!(RawDigits::strip(digits).as_str(), digits);
        }
    }

    #[test]
    fn to_cents_distinguishes_empty_from_zero() {
        assert_eq!(RawDigits::strip("").to_cents(), Ok(None));
        assert_eq!(RawDigits::strip("0").to_cents(), Ok(Some(AmountCents(0))));
        assert_eq!(RawDigits::strip("00").to_cents(), Ok(Some(AmountCents(0))));
    }

    #[test]
    fn to_cents_parses_base_ten() {
        assert_eq!(
            RawDigits::strip("1050").to_cents(),
            Ok(Some(AmountCents(1050)))
        );
        assert_eq!(
            RawDigits::strip("18446744073709551615").to_cents(),
            Ok(Some(AmountCents(u64::MAX)))
        );
    }

    #[test]
    fn to_cents_reports_overflow() {
        let digits = RawDigits::strip("18446744073709551616");
        assert_eq!(
            digits.to_cents(),
            Err(AmountError::overflow("18446744073709551616"))
        );
    }

    #[test]
    fn cents_split_into_units_and_fraction() {
        let cents = AmountCents(1050);
        assert_eq!(cents.units(), 10);
        assert_eq!(cents.fraction(), 50);
        assert_eq!(AmountCents(7).units(), 0);
        assert_eq!(AmountCents(7).fraction(), 7);
    }

    #[test]
    fn raw_digits_from_cents() {
        assert_eq!(RawDigits::from(AmountCents(1050)).as_str(), "1050");
    }
}
