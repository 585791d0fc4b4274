//! Reusable widgets for the money input TUI.
//!
//! - [`MoneyInput`]: a bordered currency field rendered from a [`MoneyInputState`]
//!
//! [`MoneyInputState`]: crate::state::MoneyInputState

mod money_input;

pub use money_input::MoneyInput;
