//! Back-off policy for portal page fetches.
//!
//! [`PortalClient::get_page`](crate::client::PortalClient::get_page) asks the
//! policy after every failed attempt whether, and how long, to wait before
//! the next one. The login handshake never consults it.

use std::time::Duration;

use crate::error::ScraperError;

/// Upper bound on a single back-off delay, before jitter.
const MAX_DELAY: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RetryPolicy {
    max_retries: u32,
    backoff_base_ms: u64,
}

impl RetryPolicy {
    pub(crate) fn new(max_retries: u32, backoff_base_ms: u64) -> Self {
        Self {
            max_retries,
            backoff_base_ms,
        }
    }

    /// Delay before the next attempt, or `None` when `err` should be
    /// returned as-is.
    ///
    /// `retries_done` counts retries already made. Only transient failures
    /// are retried: timeouts, connect errors and 5xx statuses. The delay
    /// doubles per retry from `backoff_base_ms`, is capped at 30 s, and is
    /// spread by ±25 % jitter.
    pub(crate) fn next_delay(&self, retries_done: u32, err: &ScraperError) -> Option<Duration> {
        if retries_done >= self.max_retries || !is_transient(err) {
            return None;
        }
        let exponent = retries_done.min(10);
        let base = Duration::from_millis(self.backoff_base_ms.saturating_mul(1 << exponent));
        Some(base.min(MAX_DELAY).mul_f64(rand::random_range(0.75..=1.25)))
    }
}

fn is_transient(err: &ScraperError) -> bool {
    match err {
        ScraperError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        ScraperError::UnexpectedStatus { status, .. } => *status >= 500,
        ScraperError::NotFound { .. }
        | ScraperError::InvalidUrl { .. }
        | ScraperError::Authentication { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthStage;

    fn status(code: u16) -> ScraperError {
        ScraperError::UnexpectedStatus {
            status: code,
            url: "https://portal.example/search".to_owned(),
        }
    }

    #[test]
    fn server_errors_are_retried_until_budget_is_spent() {
        let policy = RetryPolicy::new(2, 100);
        assert!(policy.next_delay(0, &status(503)).is_some());
        assert!(policy.next_delay(1, &status(500)).is_some());
        assert!(policy.next_delay(2, &status(503)).is_none());
    }

    #[test]
    fn zero_budget_never_retries() {
        assert!(RetryPolicy::new(0, 100).next_delay(0, &status(503)).is_none());
    }

    #[test]
    fn client_errors_are_returned_immediately() {
        let policy = RetryPolicy::new(5, 100);
        assert!(policy.next_delay(0, &status(403)).is_none());
        assert!(policy
            .next_delay(
                0,
                &ScraperError::NotFound {
                    url: "https://portal.example/missing".to_owned(),
                }
            )
            .is_none());
        assert!(policy
            .next_delay(0, &ScraperError::auth(AuthStage::LoginForm, "no form"))
            .is_none());
    }

    #[test]
    fn delay_doubles_within_jitter_bounds() {
        let policy = RetryPolicy::new(5, 400);
        for (retries_done, base_ms) in [(0u32, 400u64), (1, 800), (2, 1600)] {
            let delay = policy.next_delay(retries_done, &status(503)).unwrap();
            let ms = u64::try_from(delay.as_millis()).unwrap();
            assert!(
                (base_ms * 3 / 4..=base_ms * 5 / 4).contains(&ms),
                "retry {retries_done}: {ms} ms outside ±25 % of {base_ms} ms"
            );
        }
    }

    #[test]
    fn delay_is_capped() {
        let policy = RetryPolicy::new(40, 10_000);
        let delay = policy.next_delay(30, &status(503)).unwrap();
        assert!(delay <= MAX_DELAY.mul_f64(1.25), "delay was {delay:?}");
    }
}
