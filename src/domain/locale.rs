//! Locale tags and the numeral conventions they select.
//!
//! Only the parts of a locale that matter for a fixed-currency field are
//! modelled: the decimal separator and where the `€` sign goes. Grouping
//! separators are never emitted, so they are not tracked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::AmountError;

// ============================================================================
// Conventions
// ============================================================================

/// Placement of the currency symbol relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `€10.50`
    Prefix,
    /// `€ 10,50`
    PrefixSpaced,
    /// `10,50 €`
    SuffixSpaced,
}

/// Numeral conventions for currency display in one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conventions {
    pub decimal_separator: char,
    pub symbol_position: SymbolPosition,
}

const DOT_PREFIX: Conventions = Conventions {
    decimal_separator: '.',
    symbol_position: SymbolPosition::Prefix,
};

const COMMA_SUFFIX: Conventions = Conventions {
    decimal_separator: ',',
    symbol_position: SymbolPosition::SuffixSpaced,
};

const DOT_PREFIX_SPACED: Conventions = Conventions {
    decimal_separator: '.',
    symbol_position: SymbolPosition::PrefixSpaced,
};

const DOT_SUFFIX: Conventions = Conventions {
    decimal_separator: '.',
    symbol_position: SymbolPosition::SuffixSpaced,
};

const COMMA_PREFIX: Conventions = Conventions {
    decimal_separator: ',',
    symbol_position: SymbolPosition::Prefix,
};

const COMMA_PREFIX_SPACED: Conventions = Conventions {
    decimal_separator: ',',
    symbol_position: SymbolPosition::PrefixSpaced,
};

/// Region-specific entries, checked before the language table.
const REGION_CONVENTIONS: &[(&str, Conventions)] = &[
    ("de-AT", COMMA_PREFIX_SPACED),
    ("nl-BE", COMMA_SUFFIX),
    ("en-IE", DOT_PREFIX),
    ("en-MT", DOT_PREFIX),
    ("en-ZA", COMMA_PREFIX),
    ("de-CH", DOT_PREFIX_SPACED),
    ("de-LI", DOT_PREFIX_SPACED),
    ("it-CH", DOT_PREFIX_SPACED),
    ("fr-CH", DOT_SUFFIX),
    ("es-MX", DOT_PREFIX_SPACED),
];

/// Language-level defaults.
const LANGUAGE_CONVENTIONS: &[(&str, Conventions)] = &[
    ("en", DOT_PREFIX),
    ("ja", DOT_PREFIX),
    ("zh", DOT_PREFIX),
    ("ko", DOT_PREFIX),
    ("ga", DOT_PREFIX),
    ("mt", DOT_PREFIX),
    ("de", COMMA_SUFFIX),
    ("fr", COMMA_SUFFIX),
    ("es", COMMA_SUFFIX),
    ("it", COMMA_SUFFIX),
    ("pt", COMMA_SUFFIX),
    ("fi", COMMA_SUFFIX),
    ("sv", COMMA_SUFFIX),
    ("da", COMMA_SUFFIX),
    ("pl", COMMA_SUFFIX),
    ("cs", COMMA_SUFFIX),
    ("sk", COMMA_SUFFIX),
    ("sl", COMMA_SUFFIX),
    ("hr", COMMA_SUFFIX),
    ("el", COMMA_SUFFIX),
    ("et", COMMA_SUFFIX),
    ("lv", COMMA_SUFFIX),
    ("lt", COMMA_SUFFIX),
    ("ru", COMMA_SUFFIX),
    ("uk", COMMA_SUFFIX),
    ("bg", COMMA_SUFFIX),
    ("ro", COMMA_SUFFIX),
    ("hu", COMMA_SUFFIX),
    ("nb", COMMA_SUFFIX),
    ("nn", COMMA_SUFFIX),
    ("no", COMMA_SUFFIX),
    ("tr", COMMA_PREFIX),
    ("nl", COMMA_PREFIX_SPACED),
];

/// Tag used whenever a requested locale is unknown.
pub const FALLBACK_LOCALE: &str = "en-US";

// ============================================================================
// Locale
// ============================================================================

/// A BCP-47 language tag resolved to its currency conventions.
///
/// Serialized as its canonical tag string, e.g. `"de-DE"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    conventions: Conventions,
}

impl Locale {
    /// Resolve `tag`, falling back to `en-US` when it is not recognised.
    #[must_use]
    pub fn resolve(tag: &str) -> Self {
        match tag.parse() {
            Ok(locale) => locale,
            Err(err) => {
                tracing::debug!("{err}, falling back to {FALLBACK_LOCALE}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub const fn conventions(&self) -> Conventions {
        self.conventions
    }

    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.conventions.decimal_separator
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            tag: FALLBACK_LOCALE.to_string(),
            conventions: DOT_PREFIX,
        }
    }
}

/// Canonicalize case and separators: `DE_de` -> `de-DE`.
fn canonical_tag(tag: &str) -> Option<(String, String)> {
    let mut parts = tag.trim().split(['-', '_']);
    let language = parts.next()?.to_ascii_lowercase();
    if language.len() < 2 || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut canonical = language.clone();
    for part in parts {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        canonical.push('-');
        match part.len() {
            // region, e.g. DE
            2 => canonical.push_str(&part.to_ascii_uppercase()),
            // script, e.g. Latn
            4 => {
                let mut chars = part.chars();
                if let Some(first) = chars.next() {
                    canonical.push(first.to_ascii_uppercase());
                    canonical.push_str(&chars.as_str().to_ascii_lowercase());
                }
            }
            _ => canonical.push_str(&part.to_ascii_lowercase()),
        }
    }
    Some((canonical, language))
}

impl FromStr for Locale {
    type Err = AmountError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let (canonical, language) =
            canonical_tag(tag).ok_or_else(|| AmountError::unknown_locale(tag))?;

        let region_match = REGION_CONVENTIONS
            .iter()
            .find(|(prefix, _)| {
                canonical == *prefix || canonical.starts_with(&format!("{prefix}-"))
            })
            .map(|(_, conventions)| *conventions);

        let conventions = region_match
            .or_else(|| {
                LANGUAGE_CONVENTIONS
                    .iter()
                    .find(|(lang, _)| *lang == language)
                    .map(|(_, conventions)| *conventions)
            })
            .ok_or_else(|| AmountError::unknown_locale(tag))?;

        Ok(Self {
            tag: canonical,
            conventions,
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::resolve(&tag))
    }
}

// ============================================================================
// Tests
// ============================================================================
