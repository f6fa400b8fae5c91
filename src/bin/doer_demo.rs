use capability_chain::utils::logger;
use capability_chain::{
    fetch_page_length, retry_http_client, HttpClientConfig, MockHttpClient, ReqwestClient,
};

const URL: &str = "http://www.google.com";

fn main() -> anyhow::Result<()> {
    logger::init_logger();

    // A real client with a non-default timeout
    let config = HttpClientConfig::default().with_timeout_seconds(3);
    let mut client = ReqwestClient::new(&config)?;
    report("real client", fetch_page_length(&mut client, URL));

    // A mock that always answers with the same body
    let mut canned = MockHttpClient::from_string("test response");
    report("mock client", fetch_page_length(&mut canned, URL));

    // The real client, retried up to three times
    let mut retrying = retry_http_client(ReqwestClient::new(&config)?, 3)?;
    report("retry client", fetch_page_length(&mut retrying, URL));

    Ok(())
}

fn report(method: &str, result: capability_chain::HttpResult<usize>) {
    match result {
        Ok(length) => println!("Fetched page {} length using {}: {}", URL, method, length),
        Err(e) => {
            tracing::warn!(error = %e, "Fetch failed");
            println!("Failed to fetch page {} length using {}: {}", URL, method, e);
        }
    }
}
