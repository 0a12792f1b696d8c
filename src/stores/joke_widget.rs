//! Joke widget controller
//!
//! Synchronous state machine behind the widget. It owns the display state, the
//! Idle/Loading phase, the error banner and the copy button label. Async work (the
//! request, the clipboard write, timers) happens elsewhere and reports back through
//! `complete_fetch`, `finish_copy` and `reset_copy_label`, each of which checks that the
//! report still belongs to the newest attempt before touching anything.

use crate::config::{animation, messages};
use crate::services::clipboard::ClipboardError;
use crate::services::joke_api::FetchError;
use crate::utils::cancel::CancelToken;
use crate::utils::display_state::DisplayState;

/// Sequence number of a fetch attempt
pub type AttemptId = u64;

/// Idle/Loading phase of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

/// Text on the copy button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyLabel {
    #[default]
    Default,
    Copied,
    Failed,
}

impl CopyLabel {
    pub fn text(&self) -> &'static str {
        match self {
            CopyLabel::Default => messages::COPY_JOKE_BTN_DEFAULT,
            CopyLabel::Copied => messages::COPY_JOKE_BTN_COPIED,
            CopyLabel::Failed => messages::COPY_JOKE_BTN_FAILED,
        }
    }
}

/// Identifies one copy invocation so its reset timer can tell if it is stale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// One fetch attempt: its id plus the token that aborts its request
#[derive(Debug, Clone)]
pub struct RequestLifecycle {
    pub attempt: AttemptId,
    pub cancel: CancelToken,
}

/// The single controller for the joke widget
#[derive(Debug, Clone, Default)]
pub struct JokeWidgetController {
    display: DisplayState,
    phase: Phase,
    error: Option<FetchError>,
    copy_label: CopyLabel,
    /// Display content from before the in-flight attempt
    previous: DisplayState,
    in_flight: Option<RequestLifecycle>,
    attempts: AttemptId,
    copies: u64,
    latest_copy: Option<CopyTicket>,
    fade_epoch: u64,
}

impl JokeWidgetController {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================================
    // Read side
    // ============================================================================

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Error shown in the banner, if any
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn copy_label(&self) -> CopyLabel {
        self.copy_label
    }

    /// Bumped on every display text change; drives the fade-in restart
    pub fn fade_epoch(&self) -> u64 {
        self.fade_epoch
    }

    pub fn fetch_button_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn fetch_button_label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => messages::GET_JOKE_BTN_DEFAULT,
            Phase::Loading => messages::LOADING,
        }
    }

    /// Copy is possible only when idle and showing something worth copying
    pub fn copy_button_enabled(&self) -> bool {
        !self.is_loading() && self.display.copyable_text().is_some()
    }

    pub fn error_banner_visible(&self) -> bool {
        self.error.is_some() && !self.is_loading()
    }

    pub fn retry_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn display_opacity(&self) -> &'static str {
        match self.phase {
            Phase::Idle => animation::NORMAL_OPACITY,
            Phase::Loading => animation::LOADING_OPACITY,
        }
    }

    // ============================================================================
    // Fetch lifecycle
    // ============================================================================

    /// Idle -> Loading
    ///
    /// Returns `None` while another attempt is in flight. Hides the error banner and
    /// remembers the current display so a failure can fall back to it.
    pub fn begin_fetch(&mut self) -> Option<RequestLifecycle> {
        if self.is_loading() {
            return None;
        }

        self.attempts += 1;
        let lifecycle = RequestLifecycle {
            attempt: self.attempts,
            cancel: CancelToken::new(),
        };

        self.phase = Phase::Loading;
        self.error = None;
        self.previous = std::mem::replace(&mut self.display, DisplayState::Loading);
        self.in_flight = Some(lifecycle.clone());
        self.fade_epoch += 1;

        Some(lifecycle)
    }

    /// Loading -> Idle
    ///
    /// Returns false, leaving state untouched, when `lifecycle` is not the in-flight
    /// attempt (already completed or superseded). A success reported on a cancelled
    /// token is recorded as a timeout.
    pub fn complete_fetch(
        &mut self,
        lifecycle: &RequestLifecycle,
        result: Result<String, FetchError>,
    ) -> bool {
        match &self.in_flight {
            Some(current) if current.attempt == lifecycle.attempt => {}
            _ => return false,
        }
        self.in_flight = None;

        let result = match result {
            Ok(_) if lifecycle.cancel.is_cancelled() => Err(FetchError::Timeout),
            other => other,
        };

        let previous = std::mem::take(&mut self.previous);
        match result {
            Ok(joke) => {
                self.display = DisplayState::Joke(joke);
                self.error = None;
            }
            Err(error) => {
                // A failed retry keeps a joke that is still on screen
                self.display = if previous.is_joke() {
                    previous
                } else {
                    DisplayState::ErrorMessage(error.user_message().to_string())
                };
                self.error = Some(error);
            }
        }

        self.phase = Phase::Idle;
        self.fade_epoch += 1;
        true
    }

    /// Abort the in-flight request, if any, and return to Idle as a timeout
    pub fn cancel_in_flight(&mut self) -> bool {
        let Some(lifecycle) = self.in_flight.clone() else {
            return false;
        };
        lifecycle.cancel.cancel();
        self.complete_fetch(&lifecycle, Err(FetchError::Timeout))
    }

    // ============================================================================
    // Copy lifecycle
    // ============================================================================

    /// Start a copy: returns the trimmed text to write, or `None` for a no-op
    pub fn begin_copy(&mut self) -> Option<(CopyTicket, String)> {
        if self.is_loading() {
            return None;
        }
        let text = self.display.copyable_text()?.to_string();

        self.copies += 1;
        let ticket = CopyTicket(self.copies);
        self.latest_copy = Some(ticket);

        Some((ticket, text))
    }

    /// Show the outcome of a clipboard write on the copy button
    ///
    /// Ignored if a newer copy has started since `ticket` was issued.
    pub fn finish_copy(&mut self, ticket: CopyTicket, result: &Result<(), ClipboardError>) -> bool {
        if self.latest_copy != Some(ticket) {
            return false;
        }

        self.copy_label = match result {
            Ok(()) => CopyLabel::Copied,
            Err(_) => CopyLabel::Failed,
        };
        true
    }

    /// Revert the copy button label
    ///
    /// Only the newest copy's timer resets the label; older timers are no-ops.
    pub fn reset_copy_label(&mut self, ticket: CopyTicket) -> bool {
        if self.latest_copy != Some(ticket) {
            return false;
        }

        self.latest_copy = None;
        self.copy_label = CopyLabel::Default;
        true
    }
}
