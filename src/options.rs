//! Table and advisory configuration.

use core::time::Duration;

/// Chips a fresh table starts with.
pub const DEFAULT_STARTING_BALANCE: usize = 100;

/// Default bound on how long an advisory request may take.
pub const DEFAULT_ADVISORY_TIMEOUT: Duration = Duration::from_secs(5);

/// Default number of advisory requests that may be in flight at once.
pub const DEFAULT_MAX_PENDING: usize = 4;

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::TableOptions;
///
/// let options = TableOptions::default().with_starting_balance(250);
/// assert_eq!(options.starting_balance, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Chip balance before the first round.
    pub starting_balance: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
        }
    }
}

impl TableOptions {
    /// Sets the starting chip balance.
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }
}

/// Configuration for the advisory client.
///
/// ```
/// use core::time::Duration;
/// use bjcore::AdvisoryOptions;
///
/// let options = AdvisoryOptions::default().with_timeout(Duration::from_millis(750));
/// assert_eq!(options.timeout, Duration::from_millis(750));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryOptions {
    /// Longest wait for the advisory service before falling back.
    pub timeout: Duration,
    /// Most requests still running on worker threads, including ones the
    /// caller already gave up on. Further requests fail fast.
    pub max_pending: usize,
}

impl Default for AdvisoryOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_ADVISORY_TIMEOUT,
            max_pending: DEFAULT_MAX_PENDING,
        }
    }
}

impl AdvisoryOptions {
    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets how many requests may be in flight at once.
    #[must_use]
    pub const fn with_max_pending(mut self, max_pending: usize) -> Self {
        self.max_pending = max_pending;
        self
    }
}
