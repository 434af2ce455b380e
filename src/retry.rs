//! Bounded fixed-delay retry for the GET path.

use std::time::Duration;

/// How many times a failed GET is re-attempted, and how long to wait
/// between attempts.
///
/// The default policy performs no retries. When retries are requested
/// without an explicit delay, attempts are spaced three seconds apart.
///
/// # Examples
///
/// ```
/// use sendly::RetryPolicy;
/// use std::time::Duration;
///
/// // Three extra attempts, 3s apart.
/// let policy = RetryPolicy::new(3);
/// assert_eq!(policy.delay, Duration::from_secs(3));
///
/// // Three extra attempts, 10s apart.
/// let policy = RetryPolicy::with_delay(3, Duration::from_secs(10));
/// assert_eq!(policy.attempts, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of re-attempts after the initial one. Zero disables retry.
    pub attempts: u32,
    /// Fixed delay between attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    /// The delay used when none is specified.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(3);

    /// A policy with the given number of attempts and the default delay.
    pub fn new(attempts: u32) -> Self {
        Self {
            attempts,
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// A policy with the given number of attempts and an explicit delay.
    pub fn with_delay(attempts: u32, delay: Duration) -> Self {
        Self { attempts, delay }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 0,
            delay: Self::DEFAULT_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_default_policy_never_retries() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.attempts, 0);
        assert_eq!(policy.delay, Duration::from_secs(3));
    }

    #[test]
    fn new_uses_the_default_delay() {
        let policy = RetryPolicy::new(5);
        assert_eq!(policy.attempts, 5);
        assert_eq!(policy.delay, RetryPolicy::DEFAULT_DELAY);
    }
}
