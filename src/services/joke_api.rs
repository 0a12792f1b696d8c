use async_trait::async_trait;
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

use crate::config::{messages, WidgetConfig};
use crate::utils::cancel::CancelToken;

/// Body returned by icanhazdadjoke with `Accept: application/json`
///
/// The API also sends `id` and `status`; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct JokeResponse {
    pub joke: String,
}

/// Error type for joke fetches
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The attempt outlived its timeout and was aborted
    Timeout,
    /// The request never produced a response
    Network(String),
    /// The server answered with a non-2xx status
    BadStatus(u16),
    /// Anything else, including a body without a `joke` field
    Unknown(String),
}

impl FetchError {
    /// Message shown in the error banner
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Timeout => messages::ERROR_TIMEOUT,
            FetchError::Network(_) => messages::ERROR_NETWORK,
            FetchError::BadStatus(_) | FetchError::Unknown(_) => messages::ERROR_FETCH_JOKE,
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FetchError::Timeout => write!(f, "Request timed out"),
            FetchError::Network(e) => write!(f, "Network error: {}", e),
            FetchError::BadStatus(code) => write!(f, "HTTP error: {}", code),
            FetchError::Unknown(e) => write!(f, "Unexpected error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can produce one joke per call
///
/// Implementations must register an abort action on `cancel` if the underlying
/// transport supports it; dropping the future alone does not stop a browser fetch.
#[async_trait(?Send)]
pub trait JokeSource {
    async fn fetch_joke(&self, cancel: &CancelToken) -> Result<String, FetchError>;
}

/// icanhazdadjoke API client
pub struct IcanhazdadjokeApi {
    endpoint: String,
}

impl IcanhazdadjokeApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.endpoint.clone())
    }
}

#[async_trait(?Send)]
impl JokeSource for IcanhazdadjokeApi {
    async fn fetch_joke(&self, cancel: &CancelToken) -> Result<String, FetchError> {
        let controller = web_sys::AbortController::new()
            .map_err(|e| FetchError::Unknown(format!("AbortController unavailable: {:?}", e)))?;
        let signal = controller.signal();
        cancel.on_cancel(move || controller.abort());

        let response = Request::get(&self.endpoint)
            .header("Accept", "application/json")
            .abort_signal(Some(&signal))
            .send()
            .await
            .map_err(|e| classify_transport_error(e, cancel))?;

        if !response.ok() {
            return Err(FetchError::BadStatus(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_transport_error(e, cancel))?;

        parse_joke_body(&body)
    }
}

/// Map a gloo-net error, treating anything after cancellation as a timeout
fn classify_transport_error(error: gloo_net::Error, cancel: &CancelToken) -> FetchError {
    if cancel.is_cancelled() {
        return FetchError::Timeout;
    }

    match error {
        gloo_net::Error::JsError(e) => FetchError::Network(e.to_string()),
        gloo_net::Error::SerdeError(e) => {
            FetchError::Unknown(format!("Failed to parse response: {}", e))
        }
        gloo_net::Error::GlooError(e) => FetchError::Unknown(e),
    }
}

/// Extract the `joke` field, untouched, from a response body
pub fn parse_joke_body(body: &str) -> Result<String, FetchError> {
    let parsed: JokeResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::Unknown(format!("Failed to parse response: {}", e)))?;
    Ok(parsed.joke)
}

/// Race a fetch against a timer
///
/// When the timer wins, `cancel` is cancelled (aborting the transport) and the
/// request future is dropped without being polled again.
pub async fn fetch_with_timeout<S, F, T>(
    source: &S,
    cancel: &CancelToken,
    timeout: Duration,
    sleep: F,
) -> Result<String, FetchError>
where
    S: JokeSource + ?Sized,
    F: FnOnce(Duration) -> T,
    T: Future<Output = ()>,
{
    let request = source.fetch_joke(cancel);
    let timer = sleep(timeout);
    pin_mut!(request, timer);

    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            cancel.cancel();
            Err(FetchError::Timeout)
        }
    }
}
