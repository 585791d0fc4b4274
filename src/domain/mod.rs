//! Domain types for the money input.
//!
//! - [`amount`]: [`RawDigits`] and [`AmountCents`]
//! - [`locale`]: [`Locale`] and its currency conventions
//! - [`error`]: [`AmountError`]

pub mod amount;
pub mod error;
pub mod locale;

pub use amount::{AmountCents, RawDigits};
pub use error::AmountError;
pub use locale::{Locale, SymbolPosition};
