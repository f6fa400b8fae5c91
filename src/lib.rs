//! Composable single-operation capabilities.
//!
//! A [`Capability`] is one injectable operation. Leaves perform the effect
//! (or fake it in tests); decorators wrap another capability of the same
//! shape and change what happens around the inner call. Two domains are
//! provided on top of the generic core: message publishing
//! ([`Publisher`]) and blocking HTTP dispatch ([`HttpClient`]).
//!
//! ```
//! use capability_chain::{batch_publisher, transform_publisher, MockPublisher, Publisher};
//!
//! let sink = MockPublisher::new(|msg| {
//!     assert_eq!(msg, "A,B");
//!     Ok(())
//! });
//! let upper = transform_publisher(sink, |msg| msg.to_uppercase());
//! let mut publisher = batch_publisher(upper, 2).unwrap();
//!
//! publisher.publish("a").unwrap();
//! publisher.publish("b").unwrap();
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::*;
pub use config::HttpClientConfig;
pub use core::{
    from_fn, Batch, BoxCapability, Capability, CapabilityExt, FnCapability, Multiplex, Retry,
    Transform, TryTransform,
};
pub use domain::model::{Request, Response};
pub use domain::ports::{BoxHttpClient, BoxPublisher, HttpClient, Publisher};
pub use utils::error::{
    ConfigError, ConfigResult, HttpError, HttpResult, PublishError, PublishResult, TransformError,
};
