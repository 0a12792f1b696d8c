use gloo_timers::future::TimeoutFuture;
use std::time::Duration;

use crate::config::duration_to_millis;

/// Browser timer future, for use as the `sleep` argument of the widget flows
pub fn sleep(duration: Duration) -> TimeoutFuture {
    TimeoutFuture::new(duration_to_millis(duration))
}
