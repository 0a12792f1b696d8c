//! Async flows for the joke widget
//!
//! Fetch and copy as plain futures over a `WidgetHandle`, so the same code runs
//! against a Dioxus signal in the browser and an `Rc<RefCell<_>>` in tests. Timers are
//! passed in as a `sleep` function for the same reason.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crate::services::clipboard::{ClipboardError, ClipboardWriter};
use crate::services::joke_api::{fetch_with_timeout, FetchError, JokeSource};
use crate::stores::joke_widget::JokeWidgetController;

/// Shared, mutable access to the controller
pub trait WidgetHandle: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut JokeWidgetController) -> R) -> R;
}

impl WidgetHandle for Signal<JokeWidgetController> {
    fn update<R>(&self, f: impl FnOnce(&mut JokeWidgetController) -> R) -> R {
        let mut signal = *self;
        let mut widget = signal.write();
        f(&mut *widget)
    }
}

impl WidgetHandle for Rc<RefCell<JokeWidgetController>> {
    fn update<R>(&self, f: impl FnOnce(&mut JokeWidgetController) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

/// How a fetch flow ended
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Another attempt was already in flight
    Busy,
    /// A joke is on screen
    Displayed,
    /// The attempt failed and the banner shows why
    Failed(FetchError),
    /// The result arrived after the attempt stopped being current
    Stale,
}

/// How a copy flow ended
#[derive(Debug, Clone, PartialEq)]
pub enum CopyOutcome {
    /// Nothing worth copying was on screen
    Skipped,
    Copied,
    Failed(ClipboardError),
}

/// Fetch a joke and apply it to the widget
pub async fn fetch_joke<H, S, F, T>(
    widget: H,
    source: &S,
    timeout: Duration,
    sleep: F,
) -> FetchOutcome
where
    H: WidgetHandle,
    S: JokeSource + ?Sized,
    F: FnOnce(Duration) -> T,
    T: Future<Output = ()>,
{
    let Some(lifecycle) = widget.update(|w| w.begin_fetch()) else {
        log::debug!("Fetch ignored, attempt already in flight");
        return FetchOutcome::Busy;
    };

    let result = fetch_with_timeout(source, &lifecycle.cancel, timeout, sleep).await;

    match &result {
        Ok(_) => log::info!("Fetched joke (attempt {})", lifecycle.attempt),
        Err(FetchError::Timeout) => {
            log::warn!(
                "Joke request timed out after {:?} (attempt {})",
                timeout,
                lifecycle.attempt
            )
        }
        Err(e) => log::error!("Error fetching joke: {}", e),
    }

    let outcome = match &result {
        Ok(_) => FetchOutcome::Displayed,
        Err(e) => FetchOutcome::Failed(e.clone()),
    };

    if widget.update(|w| w.complete_fetch(&lifecycle, result)) {
        outcome
    } else {
        log::debug!("Discarded result of stale attempt {}", lifecycle.attempt);
        FetchOutcome::Stale
    }
}

/// Copy the displayed text and flash the outcome on the copy button
///
/// Resolves after the label reset delay. Every copy that reaches the clipboard
/// schedules exactly one reset; a reset from an older copy leaves a newer label alone.
pub async fn copy_joke<H, C, F, T>(
    widget: H,
    clipboard: &C,
    reset_delay: Duration,
    sleep: F,
) -> CopyOutcome
where
    H: WidgetHandle,
    C: ClipboardWriter + ?Sized,
    F: FnOnce(Duration) -> T,
    T: Future<Output = ()>,
{
    let Some((ticket, text)) = widget.update(|w| w.begin_copy()) else {
        return CopyOutcome::Skipped;
    };

    let result = clipboard.write_text(&text).await;
    match &result {
        Ok(()) => log::info!("Joke copied to clipboard"),
        Err(e) => log::error!("Clipboard error: {}", e),
    }
    widget.update(|w| w.finish_copy(ticket, &result));

    sleep(reset_delay).await;
    widget.update(|w| w.reset_copy_label(ticket));

    match result {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => CopyOutcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::messages;
    use crate::stores::joke_widget::CopyLabel;
    use crate::utils::cancel::CancelToken;
    use crate::utils::display_state::DisplayState;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use futures::future;
    use std::cell::Cell;

    type Shared = Rc<RefCell<JokeWidgetController>>;

    fn shared() -> Shared {
        Rc::new(RefCell::new(JokeWidgetController::new()))
    }

    fn never(_: Duration) -> future::Pending<()> {
        future::pending()
    }

    struct ScriptedSource(Result<String, FetchError>);

    #[async_trait(?Send)]
    impl JokeSource for ScriptedSource {
        async fn fetch_joke(&self, _cancel: &CancelToken) -> Result<String, FetchError> {
            self.0.clone()
        }
    }

    struct HangingSource {
        aborted: Rc<Cell<bool>>,
    }

    #[async_trait(?Send)]
    impl JokeSource for HangingSource {
        async fn fetch_joke(&self, cancel: &CancelToken) -> Result<String, FetchError> {
            let aborted = self.aborted.clone();
            cancel.on_cancel(move || aborted.set(true));
            future::pending::<()>().await;
            Ok("late".to_string())
        }
    }

    #[derive(Default)]
    struct MemoryClipboard {
        writes: RefCell<Vec<String>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl ClipboardWriter for MemoryClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.writes.borrow_mut().push(text.to_string());
            if self.fail {
                Err(ClipboardError::Rejected("NotAllowedError".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn with_joke(joke: &str) -> Shared {
        let widget = shared();
        let source = ScriptedSource(Ok(joke.to_string()));
        block_on(fetch_joke(widget.clone(), &source, Duration::from_secs(10), never));
        widget
    }

    #[test]
    fn test_fetch_success_scenario() {
        let widget = shared();
        let source = ScriptedSource(Ok("Why did...".to_string()));

        let outcome = block_on(fetch_joke(widget.clone(), &source, Duration::from_secs(10), never));

        assert_eq!(outcome, FetchOutcome::Displayed);
        let w = widget.borrow();
        assert_eq!(w.display(), &DisplayState::Joke("Why did...".to_string()));
        assert!(!w.error_banner_visible());
        assert!(w.copy_button_enabled());
        assert!(w.fetch_button_enabled());
    }

    #[test]
    fn test_fetch_http_500_scenario() {
        let widget = shared();
        let source = ScriptedSource(Err(FetchError::BadStatus(500)));

        let outcome = block_on(fetch_joke(widget.clone(), &source, Duration::from_secs(10), never));

        assert_eq!(outcome, FetchOutcome::Failed(FetchError::BadStatus(500)));
        let w = widget.borrow();
        assert_eq!(w.display().text(), messages::ERROR_FETCH_JOKE);
        assert!(w.error_banner_visible());
        assert!(w.retry_enabled());
        assert!(w.fetch_button_enabled());
        assert!(w.copy_button_enabled());
    }

    #[test]
    fn test_fetch_timeout_aborts_request() {
        let widget = shared();
        let aborted = Rc::new(Cell::new(false));
        let source = HangingSource {
            aborted: aborted.clone(),
        };

        let outcome = block_on(fetch_joke(
            widget.clone(),
            &source,
            Duration::from_millis(10),
            |_| future::ready(()),
        ));

        assert_eq!(outcome, FetchOutcome::Failed(FetchError::Timeout));
        assert!(aborted.get());
        let w = widget.borrow();
        assert_eq!(w.display().text(), messages::ERROR_TIMEOUT);
        assert!(!w.is_loading());
    }

    #[test]
    fn test_fetch_while_loading_is_busy() {
        let widget = shared();
        widget.borrow_mut().begin_fetch().unwrap();

        let source = ScriptedSource(Ok("ignored".to_string()));
        let outcome = block_on(fetch_joke(widget.clone(), &source, Duration::from_secs(10), never));

        assert_eq!(outcome, FetchOutcome::Busy);
        assert!(widget.borrow().is_loading());
    }

    #[test]
    fn test_fetch_result_for_abandoned_attempt_is_stale() {
        let widget = shared();

        // The request resolves only after the widget has given up on the attempt
        struct AbandoningSource(Shared);

        #[async_trait(?Send)]
        impl JokeSource for AbandoningSource {
            async fn fetch_joke(&self, _cancel: &CancelToken) -> Result<String, FetchError> {
                self.0.borrow_mut().cancel_in_flight();
                Ok("late".to_string())
            }
        }

        let source = AbandoningSource(widget.clone());
        let outcome = block_on(fetch_joke(widget.clone(), &source, Duration::from_secs(10), never));

        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(widget.borrow().display().text(), messages::ERROR_TIMEOUT);
    }

    #[test]
    fn test_copy_skipped_without_joke() {
        let clipboard = MemoryClipboard::default();
        let sleeps = Cell::new(0);

        let widget = shared();
        let outcome = block_on(copy_joke(
            widget.clone(),
            &clipboard,
            Duration::from_millis(1500),
            |_| {
                sleeps.set(sleeps.get() + 1);
                future::ready(())
            },
        ));

        assert_eq!(outcome, CopyOutcome::Skipped);
        assert!(clipboard.writes.borrow().is_empty());
        assert_eq!(sleeps.get(), 0);
        assert_eq!(widget.borrow().copy_label(), CopyLabel::Default);

        let widget = with_joke(" \t ");
        let outcome = block_on(copy_joke(widget, &clipboard, Duration::from_millis(1500), never));
        assert_eq!(outcome, CopyOutcome::Skipped);
        assert!(clipboard.writes.borrow().is_empty());
    }

    #[test]
    fn test_copy_success_label_sequence() {
        let widget = with_joke("  Why did...  ");
        let clipboard = MemoryClipboard::default();
        let labels = RefCell::new(vec![widget.borrow().copy_label()]);
        let delays = RefCell::new(Vec::new());

        let observer = widget.clone();
        let outcome = block_on(copy_joke(
            widget.clone(),
            &clipboard,
            Duration::from_millis(1500),
            |delay| {
                labels.borrow_mut().push(observer.borrow().copy_label());
                delays.borrow_mut().push(delay);
                future::ready(())
            },
        ));
        labels.borrow_mut().push(widget.borrow().copy_label());

        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(*clipboard.writes.borrow(), vec!["Why did...".to_string()]);
        assert_eq!(
            *labels.borrow(),
            vec![CopyLabel::Default, CopyLabel::Copied, CopyLabel::Default]
        );
        assert_eq!(*delays.borrow(), vec![Duration::from_millis(1500)]);
    }

    #[test]
    fn test_copy_failure_label_sequence() {
        let widget = with_joke("Why did...");
        let clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        let during = Cell::new(None);

        let observer = widget.clone();
        let outcome = block_on(copy_joke(
            widget.clone(),
            &clipboard,
            Duration::from_millis(1500),
            |_| {
                during.set(Some(observer.borrow().copy_label()));
                future::ready(())
            },
        ));

        assert!(matches!(outcome, CopyOutcome::Failed(ClipboardError::Rejected(_))));
        assert_eq!(clipboard.writes.borrow().len(), 1);
        assert_eq!(during.get(), Some(CopyLabel::Failed));
        assert_eq!(widget.borrow().copy_label(), CopyLabel::Default);
        assert_eq!(widget.borrow().copy_label().text(), messages::COPY_JOKE_BTN_DEFAULT);
    }
}
