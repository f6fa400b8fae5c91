use crate::domain::model::{Request, Response};
use crate::utils::error::{HttpError, HttpResult, PublishError, PublishResult};

/// A single-operation dependency.
///
/// Leaves perform (or simulate) the effect; decorators implement the same
/// trait around an owned inner implementer. `call` takes `&mut self`, so a
/// stateful decorator is only ever driven by one caller at a time.
pub trait Capability<I> {
    type Output;
    type Error;

    fn call(&mut self, input: I) -> Result<Self::Output, Self::Error>;
}

impl<I, C> Capability<I> for Box<C>
where
    C: Capability<I> + ?Sized,
{
    type Output = C::Output;
    type Error = C::Error;

    fn call(&mut self, input: I) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }
}

impl<I, C> Capability<I> for &mut C
where
    C: Capability<I> + ?Sized,
{
    type Output = C::Output;
    type Error = C::Error;

    fn call(&mut self, input: I) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }
}

pub type BoxCapability<I, O, E> = Box<dyn Capability<I, Output = O, Error = E>>;

/// Publishes plain string messages.
pub trait Publisher: Capability<String, Output = (), Error = PublishError> {
    fn publish(&mut self, msg: &str) -> PublishResult<()> {
        self.call(msg.to_string())
    }
}

impl<T> Publisher for T where T: Capability<String, Output = (), Error = PublishError> + ?Sized {}

pub type BoxPublisher = BoxCapability<String, (), PublishError>;

/// Performs one HTTP exchange.
pub trait HttpClient: Capability<Request, Output = Response, Error = HttpError> {
    fn execute(&mut self, request: Request) -> HttpResult<Response> {
        self.call(request)
    }
}

impl<T> HttpClient for T where T: Capability<Request, Output = Response, Error = HttpError> + ?Sized {}

pub type BoxHttpClient = BoxCapability<Request, Response, HttpError>;
