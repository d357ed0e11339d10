//! Bounded retry with exponential backoff.
//!
//! [`RetryContext`] runs an async operation until it succeeds, fails with an error that
//! [`Error::to_retry_strategy`] classifies as permanent, or exhausts its attempts. Each
//! failure is logged, and the final error is handed back to the caller so the outcome stays
//! observable.

use std::{future::Future, pin::Pin, time::Duration};

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Boxed future returned by a retried operation
pub type RetryFuture<'f, R> = Pin<Box<dyn Future<Output = Result<R, Error>> + Send + 'f>>;

/// Context for executing operations with automatic retry logic.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3 (default)
/// - **Backoff strategy**: Exponential starting at 100 milliseconds (100ms, 200ms, 400ms, ...)
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
/// - **Permanent failures**: Errors with `ErrorRetryStrategy::Fail` return immediately
///
/// # Example
///
/// ```ignore
/// let ctx = RetryContext::new();
///
/// ctx.execute_with_retry(&format!("revoke role for user ID {}", user_id), || {
///     Box::pin(identity.revoke_role(user_id, Role::ShelterOwner))
/// })
/// .await?;
/// ```
#[derive(Debug, Clone)]
pub struct RetryContext {
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Initial backoff duration (doubles with each retry)
    initial_backoff: Duration,
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(100);

    /// Creates a new retry context with 3 max attempts and 100 millisecond initial backoff.
    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
        }
    }

    /// Overrides the maximum number of attempts, at least one attempt is always made.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Overrides the backoff before the first retry.
    pub fn with_initial_backoff(mut self, initial_backoff: Duration) -> Self {
        self.initial_backoff = initial_backoff;
        self
    }

    /// Backoff to wait after the given number of failed attempts (1-based).
    pub fn backoff_for(&self, failed_attempts: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(2_u32.saturating_pow(failed_attempts.saturating_sub(1)))
    }

    /// Executes an operation with automatic retry logic and exponential backoff.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "revoke role for user ID 1")
    /// - `operation` - Function producing a fresh attempt of the async operation on each call
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Operation failed permanently or exhausted all retry attempts
    pub async fn execute_with_retry<'f, R, F>(
        &self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: Fn() -> RetryFuture<'f, R>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::error!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.backoff_for(attempt_count);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}
