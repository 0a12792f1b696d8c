use crate::config::messages;

/// What the joke display region is currently showing
///
/// A single enum instead of separate `is_loading` / `joke` / `error` fields, so the
/// display can only be in one state at a time. Button enablement is derived from it
/// rather than stored next to it.
///
/// # Examples
///
/// ```
/// let mut display = DisplayState::Placeholder;
///
/// // During fetch:
/// display = DisplayState::Loading;
///
/// // On success:
/// display = DisplayState::Joke("I'm reading a book about anti-gravity.".to_string());
/// assert!(display.is_joke());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// Initial prompt, nothing fetched yet
    #[default]
    Placeholder,

    /// A fetch is in flight
    Loading,

    /// A joke exactly as the API returned it
    Joke(String),

    /// A classified fetch failure message
    ErrorMessage(String),
}

impl DisplayState {
    /// Returns true if state holds a fetched joke
    pub fn is_joke(&self) -> bool {
        matches!(self, DisplayState::Joke(_))
    }

    /// The text rendered in the display region
    pub fn text(&self) -> &str {
        match self {
            DisplayState::Placeholder => messages::PLACEHOLDER,
            DisplayState::Loading => messages::LOADING,
            DisplayState::Joke(text) | DisplayState::ErrorMessage(text) => text,
        }
    }

    /// Trimmed display text if it is worth copying
    ///
    /// Returns `None` for the placeholder, the loading indicator, and empty or
    /// whitespace-only text. The comparison is on the rendered text, so a joke that
    /// happens to read "Loading..." is not copyable either.
    pub fn copyable_text(&self) -> Option<&str> {
        let text = self.text().trim();
        if text.is_empty() || text == messages::PLACEHOLDER || text == messages::LOADING {
            None
        } else {
            Some(text)
        }
    }
}
