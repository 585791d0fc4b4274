//! State management for the money input.
//!
//! - [`MoneyInputState`] - one field's canonical value, display and UI flags
//! - [`BlurStrategy`] - where blur-time cents are written
//! - [`AppConfig`] - persistent settings the fields are built from

pub mod config;
pub mod money_input;

pub use config::{AppConfig, FieldConfig};
pub use money_input::{BlurStrategy, MoneyInputState};
