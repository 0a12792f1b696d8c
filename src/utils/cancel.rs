use std::cell::RefCell;
use std::rc::Rc;

type CancelHook = Box<dyn FnOnce()>;

#[derive(Default)]
struct CancelState {
    cancelled: bool,
    hooks: Vec<CancelHook>,
}

/// Cancellation token for a single request attempt
///
/// Cloned into the transport, which registers how to abort itself (for the browser
/// fetch that is an `AbortController`). Whoever owns the timeout calls `cancel()`.
///
/// # Example
/// ```
/// let token = CancelToken::new();
/// token.on_cancel(move || controller.abort());
///
/// // later, when the timeout fires
/// token.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Rc<RefCell<CancelState>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the attempt and run every registered hook once
    ///
    /// Calling it again is a no-op.
    pub fn cancel(&self) {
        let hooks = {
            let mut state = self.inner.borrow_mut();
            if state.cancelled {
                return;
            }
            state.cancelled = true;
            std::mem::take(&mut state.hooks)
        };

        // Hooks run outside the borrow so they may inspect the token
        for hook in hooks {
            hook();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.borrow().cancelled
    }

    /// Register an abort action
    ///
    /// Runs immediately if the token was already cancelled.
    pub fn on_cancel<F>(&self, hook: F)
    where
        F: FnOnce() + 'static,
    {
        {
            let mut state = self.inner.borrow_mut();
            if !state.cancelled {
                state.hooks.push(Box::new(hook));
                return;
            }
        }
        hook();
    }
}

impl std::fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("CancelToken")
            .field("cancelled", &state.cancelled)
            .field("hooks", &state.hooks.len())
            .finish()
    }
}
