//! Shared test helpers: terminal fixtures and app factories.

use ratatui::{Terminal, backend::TestBackend};
use rstest::fixture;

use crate::app::App;
use crate::domain::{AmountCents, Locale};
use crate::state::{AppConfig, BlurStrategy, FieldConfig};

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_40x3() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(40, 3)).expect("terminal creation should succeed")
}

/// Two editable fields and a read-only one, German formatting.
#[fixture]
pub fn mock_app() -> App {
    App::new(&ConfigMother::form("de-DE", BlurStrategy::WriteField))
}

// ============================================================================
// Factories
// ============================================================================

/// Builds configurations for tests.
pub struct ConfigMother;

impl ConfigMother {
    #[must_use]
    pub fn form(locale: &str, blur_strategy: BlurStrategy) -> AppConfig {
        AppConfig {
            locale: Locale::resolve(locale),
            blur_strategy,
            fields: vec![
                FieldConfig::new("Price"),
                FieldConfig::new("Tip"),
                FieldConfig {
                    label: "Balance".to_string(),
                    disabled: true,
                    initial_cents: Some(AmountCents(12_345)),
                },
            ],
        }
    }
}

/// All cell symbols of the terminal buffer, row after row.
#[must_use]
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
