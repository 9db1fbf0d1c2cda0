use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

use thiserror::Error;

use crate::options::AdvisoryOptions;
use crate::result::Recommendation;

use super::{AdvisoryRequest, AdvisoryResponse};

/// Suggestion given whenever the service cannot answer.
pub const FALLBACK: Recommendation = Recommendation::Stand;

/// Failures while talking to the advisory service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The service did not answer within the configured timeout.
    #[error("advisory request timed out")]
    Timeout,
    /// The request worker stopped without an answer.
    #[error("advisory request worker disconnected")]
    Disconnected,
    /// Too many earlier requests are still running.
    #[error("too many advisory requests in flight")]
    Busy,
    /// The transport reported a failure.
    #[error("advisory transport failed: {0}")]
    Failed(String),
}

/// Reasons an advisory answer could not be used.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    /// The request never produced a body.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The body was not the expected JSON object.
    #[error("malformed advisory response: {0}")]
    Parse(#[from] serde_json::Error),
    /// The body carried a null or missing recommendation.
    #[error("advisory response has no recommendation")]
    MissingRecommendation,
    /// The recommendation was neither "Hit" nor "Stand".
    #[error("unrecognized recommendation {0:?}")]
    Unrecognized(String),
}

/// Carries an [`AdvisoryRequest`] to the service and returns the raw body.
///
/// How the request travels (HTTP, a local model, a test double) is up to the
/// implementation. Any closure with the matching signature is a transport.
///
/// The client stops waiting after [`AdvisoryOptions::timeout`] but cannot
/// cancel a call already in progress, and the worker thread stays busy until
/// `fetch` returns. Transports should apply their own I/O deadlines. At most
/// [`AdvisoryOptions::max_pending`] calls run at once; beyond that the client
/// answers [`TransportError::Busy`] without calling the transport.
pub trait AdvisoryTransport: Send + Sync + 'static {
    /// Sends `request` and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or answers with a
    /// failure.
    fn fetch(&self, request: &AdvisoryRequest) -> Result<String, TransportError>;
}

impl<F> AdvisoryTransport for F
where
    F: Fn(&AdvisoryRequest) -> Result<String, TransportError> + Send + Sync + 'static,
{
    fn fetch(&self, request: &AdvisoryRequest) -> Result<String, TransportError> {
        self(request)
    }
}

/// Parses an advisory response body.
///
/// # Errors
///
/// Returns an error if the body is not JSON, has no recommendation, or the
/// recommendation is not one of the two known moves.
pub fn parse_response(body: &str) -> Result<Recommendation, AdvisoryError> {
    let response: AdvisoryResponse = serde_json::from_str(body)?;
    let text = response
        .recommendation
        .ok_or(AdvisoryError::MissingRecommendation)?;
    Recommendation::parse(&text).ok_or(AdvisoryError::Unrecognized(text))
}

/// Asks the advisory service whether to hit or stand.
///
/// Every request runs on its own worker thread and is abandoned after
/// [`AdvisoryOptions::timeout`]. [`AdvisoryClient::recommend`] never fails; it
/// answers [`Recommendation::Stand`] instead.
///
/// ```
/// use bjcore::advisory::{AdvisoryClient, AdvisoryRequest, TransportError};
/// use bjcore::Recommendation;
///
/// let client = AdvisoryClient::new(|_: &AdvisoryRequest| -> Result<String, TransportError> {
///     Err(TransportError::Failed("offline".into()))
/// });
/// assert_eq!(client.recommend(12, 4), Recommendation::Stand);
/// ```
pub struct AdvisoryClient<T> {
    transport: Arc<T>,
    options: AdvisoryOptions,
    pending: Arc<AtomicUsize>,
}

/// Counts one running worker; released when the worker ends, even by panic.
struct PendingSlot(Arc<AtomicUsize>);

impl Drop for PendingSlot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

impl<T: AdvisoryTransport> AdvisoryClient<T> {
    /// Creates a client with default options.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_options(transport, AdvisoryOptions::default())
    }

    /// Creates a client with the given options.
    #[must_use]
    pub fn with_options(transport: T, options: AdvisoryOptions) -> Self {
        Self {
            transport: Arc::new(transport),
            options,
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns the client options.
    #[must_use]
    pub const fn options(&self) -> &AdvisoryOptions {
        &self.options
    }

    /// Returns how many requests are still running, abandoned ones included.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    /// Suggests a move for `player_total` against `dealer_card`.
    #[must_use]
    pub fn recommend(&self, player_total: u32, dealer_card: u8) -> Recommendation {
        self.recommend_for(&AdvisoryRequest::new(player_total, dealer_card))
    }

    /// Suggests a move for `request`, falling back on any failure.
    #[must_use]
    pub fn recommend_for(&self, request: &AdvisoryRequest) -> Recommendation {
        match self.try_recommend(request) {
            Ok(recommendation) => {
                log::debug!("advisory suggests {recommendation} for {request:?}");
                recommendation
            }
            Err(err) => {
                log::warn!("advisory unavailable ({err}), suggesting {FALLBACK}");
                FALLBACK
            }
        }
    }

    /// Suggests a move for `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or times out, or the response
    /// cannot be understood.
    pub fn try_recommend(&self, request: &AdvisoryRequest) -> Result<Recommendation, AdvisoryError> {
        let body = self.fetch_bounded(*request)?;
        parse_response(&body)
    }

    fn fetch_bounded(&self, request: AdvisoryRequest) -> Result<String, TransportError> {
        if self.pending.fetch_add(1, Ordering::AcqRel) >= self.options.max_pending {
            self.pending.fetch_sub(1, Ordering::AcqRel);
            return Err(TransportError::Busy);
        }
        let slot = PendingSlot(Arc::clone(&self.pending));

        let (tx, rx) = mpsc::channel();
        let transport = Arc::clone(&self.transport);

        thread::Builder::new()
            .name("advisory".to_string())
            .spawn(move || {
                let _slot = slot;
                // The receiver is gone if the caller already timed out.
                let _ = tx.send(transport.fetch(&request));
            })
            .map_err(|err| TransportError::Failed(err.to_string()))?;

        match rx.recv_timeout(self.options.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(TransportError::Timeout),
            Err(RecvTimeoutError::Disconnected) => Err(TransportError::Disconnected),
        }
    }
}
