pub mod batch;
pub mod ext;
pub mod func;
pub mod multiplex;
pub mod retry;
pub mod transform;

pub use crate::domain::ports::{BoxCapability, Capability};
pub use batch::Batch;
pub use ext::CapabilityExt;
pub use func::{from_fn, FnCapability};
pub use multiplex::Multiplex;
pub use retry::Retry;
pub use transform::{Transform, TryTransform};
