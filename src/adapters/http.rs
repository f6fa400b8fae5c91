use crate::config::HttpClientConfig;
use crate::core::{Capability, Retry};
use crate::domain::model::{Request, Response};
use crate::domain::ports::HttpClient;
use crate::utils::error::{ConfigError, ConfigResult, HttpError, HttpResult};
use crate::utils::validation::{validate_host, Validate};
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, HOST};

/// Blocking HTTP leaf backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new(config: &HttpClientConfig) -> ConfigResult<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let client = builder.build().map_err(|e| ConfigError::ClientBuildError {
            message: e.to_string(),
        })?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Capability<Request> for ReqwestClient {
    type Output = Response;
    type Error = HttpError;

    fn call(&mut self, request: Request) -> HttpResult<Response> {
        tracing::debug!(method = %request.method, url = %request.url, "Sending HTTP request");

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();

        tracing::debug!(%status, bytes = body.len(), "Received HTTP response");
        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

/// HTTP client whose behaviour is an injected callback.
pub struct MockHttpClient {
    do_fn: Box<dyn FnMut(Request) -> HttpResult<Response>>,
}

impl MockHttpClient {
    pub fn new<F>(do_fn: F) -> Self
    where
        F: FnMut(Request) -> HttpResult<Response> + 'static,
    {
        Self {
            do_fn: Box::new(do_fn),
        }
    }

    /// Answers every request with `200 OK` and the given body.
    pub fn from_string(body: &str) -> Self {
        let body = body.to_string();
        Self::new(move |_| Ok(Response::from_string(&body)))
    }
}

impl Capability<Request> for MockHttpClient {
    type Output = Response;
    type Error = HttpError;

    fn call(&mut self, request: Request) -> HttpResult<Response> {
        (self.do_fn)(request)
    }
}

/// Points every request at a fixed `host[:port]` before delegating.
///
/// Without a configured port the request's explicit port is cleared, so the
/// scheme default applies.
#[derive(Debug, Clone)]
pub struct RewriteHost<C> {
    inner: C,
    host: String,
    port: Option<u16>,
}

impl<C> RewriteHost<C> {
    pub fn new(inner: C, authority: &str) -> ConfigResult<Self> {
        let (host, port) = validate_host("host", authority)?;
        Ok(Self { inner, host, port })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl<C: HttpClient> Capability<Request> for RewriteHost<C> {
    type Output = Response;
    type Error = HttpError;

    fn call(&mut self, mut request: Request) -> HttpResult<Response> {
        let original = request.url.to_string();
        let invalid = |reason: String| HttpError::InvalidRequest {
            message: format!("cannot rewrite host of '{}': {}", original, reason),
        };

        request
            .url
            .set_host(Some(self.host.as_str()))
            .map_err(|e| invalid(e.to_string()))?;
        request
            .url
            .set_port(self.port)
            .map_err(|_| invalid("URL cannot carry a port".to_string()))?;

        // an explicit Host header overrides the URL authority on the wire
        if request.headers.contains_key(HOST) {
            let authority = match self.port {
                Some(port) => format!("{}:{}", self.host, port),
                None => self.host.clone(),
            };
            let value = HeaderValue::from_str(&authority).map_err(|e| invalid(e.to_string()))?;
            request.headers.insert(HOST, value);
        }

        tracing::debug!(from = %original, to = %request.url, "Rewrote request host");
        self.inner.call(request)
    }
}

pub fn retry_http_client<C: HttpClient>(client: C, retries: usize) -> ConfigResult<Retry<C>> {
    Retry::new(client, retries)
}

pub fn rewrite_host_http_client<C: HttpClient>(client: C, authority: &str) -> ConfigResult<RewriteHost<C>> {
    RewriteHost::new(client, authority)
}

/// Fetches `url` through `client` and returns the body length in bytes.
///
/// The status code is not inspected; any response counts.
pub fn fetch_page_length<C>(client: &mut C, url: &str) -> HttpResult<usize>
where
    C: HttpClient + ?Sized,
{
    let request = Request::get(url)?;
    let response = client.execute(request)?;
    Ok(response.len())
}
