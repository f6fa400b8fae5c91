use crate::core::batch::Batch;
use crate::core::retry::Retry;
use crate::core::transform::{Transform, TryTransform};
use crate::core::{BoxCapability, Capability};
use crate::utils::error::{ConfigResult, TransformError};

/// Adapter methods for wrapping any capability in a decorator, innermost
/// first: `leaf.transform(f).retry(3)?` retries the transformed call.
pub trait CapabilityExt<I>: Capability<I> + Sized {
    fn transform<F>(self, transform: F) -> Transform<Self, F>
    where
        F: Fn(I) -> I,
    {
        Transform::new(self, transform)
    }

    fn try_transform<F>(self, transform: F) -> TryTransform<Self, F>
    where
        F: Fn(I) -> Result<I, TransformError>,
        Self::Error: From<TransformError>,
    {
        TryTransform::new(self, transform)
    }

    fn retry(self, attempts: usize) -> ConfigResult<Retry<Self>>
    where
        I: Clone,
    {
        Retry::new(self, attempts)
    }

    fn batch<F>(self, batch_size: usize, combine: F) -> ConfigResult<Batch<Self, I, F>>
    where
        F: Fn(Vec<I>) -> I,
    {
        Batch::new(self, batch_size, combine)
    }

    fn boxed(self) -> BoxCapability<I, Self::Output, Self::Error>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<I, C> CapabilityExt<I> for C where C: Capability<I> {}
