//! Widget configuration
//!
//! Endpoint, timing and UI strings for the joke widget. Nothing here is read from
//! the environment or persisted; the defaults are the whole configuration surface.

use std::time::Duration;

/// icanhazdadjoke API endpoint
pub const JOKE_API_URL: &str = "https://icanhazdadjoke.com/";

/// Request timing
pub mod timing {
    /// Fetch attempts are aborted after this many milliseconds
    pub const FETCH_TIMEOUT_MS: u64 = 10_000;
    /// Copy button label reverts to its default after this many milliseconds
    pub const COPY_RESET_DELAY_MS: u64 = 1_500;
}

/// User-facing strings
pub mod messages {
    pub const PLACEHOLDER: &str = "Click the button above to get a dad joke!";
    pub const LOADING: &str = "Loading...";
    pub const GET_JOKE_BTN_DEFAULT: &str = "Get a Dad Joke";
    pub const COPY_JOKE_BTN_DEFAULT: &str = "Copy Joke";
    pub const COPY_JOKE_BTN_COPIED: &str = "Copied!";
    pub const COPY_JOKE_BTN_FAILED: &str = "Failed to Copy";
    pub const RETRY_BTN: &str = "Retry";
    pub const ERROR_FETCH_JOKE: &str = "Failed to fetch a joke. Please try again later.";
    pub const ERROR_NETWORK: &str = "Network error: check your connection and try again.";
    pub const ERROR_TIMEOUT: &str = "The request timed out. Please try again.";
}

/// Display region styling
pub mod animation {
    pub const FADE_IN_CLASS: &str = "fade-in";
    pub const LOADING_OPACITY: &str = "0.6";
    pub const NORMAL_OPACITY: &str = "1";
}

/// DOM id of the joke display region
pub const JOKE_ELEMENT_ID: &str = "joke";

/// Runtime configuration shared with the component tree through context
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Joke endpoint, queried with `Accept: application/json`
    pub endpoint: String,
    /// Upper bound for a single fetch attempt
    pub fetch_timeout: Duration,
    /// How long "Copied!" / "Failed to Copy" stays on the copy button
    pub copy_reset_delay: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: JOKE_API_URL.to_string(),
            fetch_timeout: Duration::from_millis(timing::FETCH_TIMEOUT_MS),
            copy_reset_delay: Duration::from_millis(timing::COPY_RESET_DELAY_MS),
        }
    }
}

/// Convert a duration into the `u32` milliseconds gloo timers expect
pub fn duration_to_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
