/// Application actions triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// A typed character for the focused field.
    Input(char),
    Backspace,
    ClearField,
    /// Bracketed paste into the focused field.
    Paste(String),
    FocusNext,
    FocusPrev,
}
