//! Rate limit status for the GitHub `core` resource.
//!
//! GitHub reports how many requests remain in the current window and when the
//! window resets. The fetcher probes this before every page request and
//! pauses when the remaining quota drops below a safety floor.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rate limit information reported by `GET /rate_limit`.
///
/// # Example
///
/// ```
/// use issuewatch::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(5000, 49, 1700000000);
/// assert!(info.is_below(50));
/// assert_eq!(info.remaining(), 49);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Maximum requests allowed in the current window.
    limit: u32,
    /// Remaining requests in the current window.
    remaining: u32,
    /// Unix timestamp when the rate limit resets.
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a new rate limit info instance.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Returns the maximum requests allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the remaining requests in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns the Unix timestamp when the rate limit resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Returns true when fewer than `floor` requests remain.
    #[must_use]
    pub const fn is_below(&self, floor: u32) -> bool {
        self.remaining < floor
    }

    /// Calculates how long to wait until the rate limit resets.
    ///
    /// Returns zero if the reset time has already passed or if the system
    /// time cannot be determined.
    #[must_use]
    pub fn until_reset(&self) -> Duration {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or(0);

        Duration::from_secs(self.reset_at.saturating_sub(now))
    }
}
