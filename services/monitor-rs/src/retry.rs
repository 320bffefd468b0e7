use std::{fmt::Display, future::Future, time::Duration};
use tokio::time::sleep;
use tracing::{info, warn};

/// Fixed-delay retry: no backoff growth, no jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub warmup: Duration,
    pub delay: Duration,
    /// `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            warmup: Duration::from_secs(10),
            delay: Duration::from_secs(5),
            max_attempts: None,
        }
    }
}

/// Calls `attempt` until it succeeds. Each attempt is preceded by
/// `policy.warmup`; each failure is followed by `policy.delay`.
///
/// Every error is treated as retryable. With a bounded policy the last error
/// is returned once the attempts are used up.
pub async fn retry_with_fixed_delay<T, E, F, Fut>(policy: RetryPolicy, mut attempt: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut tries: u32 = 0;
    loop {
        tries += 1;
        if !policy.warmup.is_zero() {
            info!(attempt = tries, warmup = ?policy.warmup, "waiting for the broker to come up");
            sleep(policy.warmup).await;
        }
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                if policy.max_attempts.is_some_and(|max| tries >= max) {
                    warn!(attempts = tries, "giving up: {}", e);
                    return Err(e);
                }
                warn!(attempt = tries, "Connection failed: {}. Retrying in {:?}...", e, policy.delay);
                sleep(policy.delay).await;
            }
        }
    }
}
