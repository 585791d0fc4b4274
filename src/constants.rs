//! Application constants for the money input.
//!
//! Currency facts, the accepted keystroke alphabet and UI dimensions live here
//! so every module agrees on them.

use std::time::Duration;

// ============================================================================
// Currency Constants
// ============================================================================

/// Minor units per major unit for EUR.
pub const CENTS_PER_UNIT: u64 = 100;

/// Number of fraction digits shown in a formatted amount.
pub const FRACTION_DIGITS: usize = 2;

/// ISO 4217 code of the fixed currency.
pub const CURRENCY_CODE: &str = "EUR";

/// Symbol printed next to formatted amounts.
pub const CURRENCY_SYMBOL: char = '€';

/// Separator between number and symbol when a locale spaces them.
pub const SYMBOL_SPACE: char = '\u{a0}';

/// Currency symbols a user may type without the field being flagged.
///
/// Besides these, digits, `.`, `,` and any whitespace are accepted.
pub const ACCEPTED_SYMBOLS: [char; 3] = ['€', '$', '£'];

// ============================================================================
// UI Constants
// ============================================================================

/// Height of one money field including its border (in rows).
pub const FIELD_HEIGHT: u16 = 3;

/// Height of the hint line under a field (in rows).
pub const HINT_HEIGHT: u16 = 1;

/// Maximum width of the form column (in columns).
pub const FORM_WIDTH: u16 = 48;

/// Event poll interval for the main loop.
pub const TICK_RATE: Duration = Duration::from_millis(250);

// ============================================================================
// Tests
// ============================================================================
