use crate::core::Capability;
use crate::utils::error::ConfigResult;
use crate::utils::validation::validate_positive_number;

/// Calls the inner implementer up to `attempts` times, back to back.
///
/// The first success is returned immediately. Earlier failures are dropped;
/// after the last attempt fails its error is returned. A zero attempt budget
/// is rejected by [`Retry::new`], so every call makes at least one attempt.
pub struct Retry<C> {
    inner: C,
    attempts: usize,
}

impl<C> Retry<C> {
    pub fn new(inner: C, attempts: usize) -> ConfigResult<Self> {
        validate_positive_number("retry_attempts", attempts, 1)?;
        Ok(Self { inner, attempts })
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<I, C> Capability<I> for Retry<C>
where
    I: Clone,
    C: Capability<I>,
{
    type Output = C::Output;
    type Error = C::Error;

    fn call(&mut self, input: I) -> Result<Self::Output, Self::Error> {
        for attempt in 1..self.attempts {
            match self.inner.call(input.clone()) {
                Ok(output) => {
                    if attempt > 1 {
                        tracing::debug!(attempt, "Succeeded after retrying");
                    }
                    return Ok(output);
                }
                Err(_) => {
                    tracing::debug!(attempt, max_attempts = self.attempts, "Attempt failed, retrying");
                }
            }
        }

        // the last attempt takes the input itself
        match self.inner.call(input) {
            Ok(output) => {
                if self.attempts > 1 {
                    tracing::debug!(attempt = self.attempts, "Succeeded after retrying");
                }
                Ok(output)
            }
            Err(err) => {
                tracing::warn!(attempts = self.attempts, "All attempts failed");
                Err(err)
            }
        }
    }
}
