use std::time::Duration;

/// Statuses treated as transient: request timeout, rate limited, service unavailable.
pub const RETRYABLE_STATUSES: [u16; 3] = [408, 429, 503];

const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(5);

pub fn is_retryable(status: u16) -> bool {
    RETRYABLE_STATUSES.contains(&status)
}

/// Bounded retry policy for a single outbound request.
///
/// The delay before retrying attempt `i` (0-based) is the `Retry-After`
/// header value in seconds when it is numeric, otherwise `base_delay * 2^i`.
/// Either way it never exceeds `max_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Number of attempts the loop makes. Zero is treated as one.
    pub fn attempts(&self) -> u32 {
        self.max_retries.max(1)
    }

    pub fn delay_for(&self, attempt: u32, retry_after: Option<&str>) -> Duration {
        let delay = match retry_after.and_then(parse_retry_after) {
            Some(delay) => delay,
            None => self
                .base_delay
                .saturating_mul(2u32.saturating_pow(attempt)),
        };
        delay.min(self.max_delay)
    }
}

/// Only the delta-seconds form is honored; HTTP-date values fall back to backoff.
fn parse_retry_after(value: &str) -> Option<Duration> {
    let seconds = value.trim().parse::<f64>().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    // Values too large for a Duration saturate; delay_for caps them anyway
    Some(Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX))
}
