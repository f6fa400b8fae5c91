use crate::core::Capability;
use crate::utils::error::ConfigResult;
use crate::utils::validation::validate_positive_number;

/// Buffers inputs and forwards them as one combined input once `batch_size`
/// have arrived.
///
/// Calls below the threshold are absorbed and return `Output::default()`.
/// The call that fills the buffer drains it in arrival order, passes the
/// drained inputs to `combine`, and forwards the result exactly once. The
/// buffer is empty again before that call returns, whatever the inner
/// result. There is no time-based flush: a partial batch stays buffered
/// until more input arrives or [`Batch::flush`] is called, and dropping the
/// decorator discards it.
pub struct Batch<C, I, F> {
    inner: C,
    batch_size: usize,
    buffer: Vec<I>,
    combine: F,
}

impl<C, I, F> Batch<C, I, F> {
    pub fn new(inner: C, batch_size: usize, combine: F) -> ConfigResult<Self>
    where
        F: Fn(Vec<I>) -> I,
    {
        validate_positive_number("batch_size", batch_size, 1)?;
        Ok(Self {
            inner,
            batch_size,
            buffer: Vec::with_capacity(batch_size),
            combine,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of inputs waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

impl<C, I, F> Batch<C, I, F>
where
    C: Capability<I>,
    F: Fn(Vec<I>) -> I,
{
    /// Forwards whatever is buffered now, even below the threshold.
    /// Returns `Ok(None)` without calling the inner implementer when the
    /// buffer is empty.
    pub fn flush(&mut self) -> Result<Option<C::Output>, C::Error> {
        if self.buffer.is_empty() {
            return Ok(None);
        }
        self.forward().map(Some)
    }

    fn forward(&mut self) -> Result<C::Output, C::Error> {
        let batch = std::mem::replace(&mut self.buffer, Vec::with_capacity(self.batch_size));
        tracing::debug!(size = batch.len(), "Forwarding batch");
        let combined = (self.combine)(batch);
        self.inner.call(combined)
    }
}

impl<C, I, F> Capability<I> for Batch<C, I, F>
where
    C: Capability<I>,
    C::Output: Default,
    F: Fn(Vec<I>) -> I,
{
    type Output = C::Output;
    type Error = C::Error;

    fn call(&mut self, input: I) -> Result<Self::Output, Self::Error> {
        self.buffer.push(input);
        if self.buffer.len() < self.batch_size {
            tracing::trace!(
                pending = self.buffer.len(),
                batch_size = self.batch_size,
                "Input buffered"
            );
            return Ok(C::Output::default());
        }
        self.forward()
    }
}
