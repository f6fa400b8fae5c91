// Adapters layer: leaf implementations, domain-specific decorators and constructors.

pub mod http;
pub mod publisher;
pub mod speaker;

pub use http::{
    fetch_page_length, retry_http_client, rewrite_host_http_client, MockHttpClient, ReqwestClient,
    RewriteHost,
};
pub use publisher::{
    batch_publisher, multi_publisher, title_case, transform_publisher, BatchPublisher,
    ConsolePublisher, MockPublisher, TracingPublisher, BATCH_DELIMITER,
};
pub use speaker::{loud, say, say_loud, say_mute, Person, SayFn};
