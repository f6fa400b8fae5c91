use crate::core::Capability;
use std::fmt;
use std::marker::PhantomData;

/// A leaf whose behaviour is a stored callback, invoked on every call.
///
/// This is the generic test double: the callback decides the result of each
/// call, so any outcome (including per-call sequences) can be scripted from
/// outside.
pub struct FnCapability<F, I, O, E> {
    f: F,
    _marker: PhantomData<fn(I) -> Result<O, E>>,
}

pub fn from_fn<F, I, O, E>(f: F) -> FnCapability<F, I, O, E>
where
    F: FnMut(I) -> Result<O, E>,
{
    FnCapability {
        f,
        _marker: PhantomData,
    }
}

impl<F, I, O, E> Capability<I> for FnCapability<F, I, O, E>
where
    F: FnMut(I) -> Result<O, E>,
{
    type Output = O;
    type Error = E;

    fn call(&mut self, input: I) -> Result<O, E> {
        (self.f)(input)
    }
}

impl<F, I, O, E> fmt::Debug for FnCapability<F, I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCapability").finish_non_exhaustive()
    }
}
