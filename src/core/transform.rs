use crate::core::Capability;
use crate::utils::error::TransformError;

/// Maps every input through a pure function before delegating.
///
/// The inner result, success or error, is returned untouched.
pub struct Transform<C, F> {
    inner: C,
    transform: F,
}

impl<C, F> Transform<C, F> {
    pub fn new(inner: C, transform: F) -> Self {
        Self { inner, transform }
    }

    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<I, C, F> Capability<I> for Transform<C, F>
where
    C: Capability<I>,
    F: Fn(I) -> I,
{
    type Output = C::Output;
    type Error = C::Error;

    fn call(&mut self, input: I) -> Result<Self::Output, Self::Error> {
        let transformed = (self.transform)(input);
        self.inner.call(transformed)
    }
}

/// Like [`Transform`], for mappings that can fail.
///
/// A mapping failure is returned as the inner error type's
/// `From<TransformError>` variant and the inner implementer is not called.
pub struct TryTransform<C, F> {
    inner: C,
    transform: F,
}

impl<C, F> TryTransform<C, F> {
    pub fn new(inner: C, transform: F) -> Self {
        Self { inner, transform }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<I, C, F> Capability<I> for TryTransform<C, F>
where
    C: Capability<I>,
    C::Error: From<TransformError>,
    F: Fn(I) -> Result<I, TransformError>,
{
    type Output = C::Output;
    type Error = C::Error;

    fn call(&mut self, input: I) -> Result<Self::Output, Self::Error> {
        let transformed = (self.transform)(input).map_err(|err| {
            tracing::debug!(error = %err, "Transform rejected input");
            err
        })?;
        self.inner.call(transformed)
    }
}
