use capability_chain::{
    fetch_page_length, retry_http_client, rewrite_host_http_client, Capability, HttpClient,
    HttpClientConfig, HttpError, MockHttpClient, ReqwestClient, Request,
};
use httpmock::prelude::*;
use reqwest::header::{HeaderValue, CONTENT_TYPE, HOST};
use reqwest::{Method, StatusCode};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use url::Url;

fn client() -> ReqwestClient {
    ReqwestClient::new(&HttpClientConfig::default().with_timeout_seconds(5)).unwrap()
}

#[test]
fn test_fetch_page_length_over_real_http() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/page");
        then.status(200).body("hello world");
    });

    let mut client = client();
    let length = fetch_page_length(&mut client, &server.url("/page")).unwrap();

    page_mock.assert();
    assert_eq!(length, 11);
}

#[test]
fn test_non_success_status_is_a_response_not_an_error() {
    let server = MockServer::start();
    let failing_mock = server.mock(|when, then| {
        when.method(GET).path("/broken");
        then.status(500).body("oops");
    });

    // the retry decorator only reacts to errors, so one attempt is made
    let mut client = retry_http_client(client(), 3).unwrap();
    let response = client
        .execute(Request::get(&server.url("/broken")).unwrap())
        .unwrap();

    failing_mock.assert_hits(1);
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(matches!(
        response.error_for_status(),
        Err(HttpError::Status { .. })
    ));
}

#[test]
fn test_rewrite_host_routes_to_configured_authority() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/page").query_param("q", "rust");
        then.status(200).body("rewritten");
    });

    let authority = format!("127.0.0.1:{}", server.address().port());
    let mut client = rewrite_host_http_client(client(), &authority).unwrap();
    let length = fetch_page_length(&mut client, "http://unreachable.invalid/page?q=rust").unwrap();

    page_mock.assert();
    assert_eq!(length, 9);
}

#[test]
fn test_request_method_headers_and_body_are_forwarded() {
    let server = MockServer::start();
    let submit_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/submit")
            .header("content-type", "text/plain")
            .body("payload");
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": 7, "accepted": true}));
    });

    let url = Url::parse(&server.url("/submit")).unwrap();
    let request = Request::new(Method::POST, url)
        .with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
        .with_body("payload");

    let response = client().execute(request).unwrap();

    submit_mock.assert();
    assert_eq!(response.status, StatusCode::CREATED);
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["id"].as_i64(), Some(7));
    assert_eq!(body["accepted"].as_bool(), Some(true));
}

#[test]
fn test_user_agent_passthrough() {
    let server = MockServer::start();
    let agent_mock = server.mock(|when, then| {
        when.method(GET).path("/").header("user-agent", "doer/1.0");
        then.status(200).body("ok");
    });

    let config = HttpClientConfig::default().with_user_agent("doer/1.0");
    let mut client = ReqwestClient::new(&config).unwrap();
    fetch_page_length(&mut client, &server.url("/")).unwrap();

    agent_mock.assert();
}

#[test]
fn test_timeout_surfaces_as_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200).body("late").delay(Duration::from_secs(3));
    });

    let config = HttpClientConfig::default().with_timeout_seconds(1);
    let mut client = ReqwestClient::new(&config).unwrap();
    let err = fetch_page_length(&mut client, &server.url("/slow")).unwrap_err();

    assert!(matches!(err, HttpError::Transport(_)));
}

#[test]
fn test_retry_makes_every_attempt_against_refused_connections() {
    // reserve a port, then free it so nothing is listening there
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let attempts = Rc::new(Cell::new(0));
    let counter = attempts.clone();
    let mut inner = client();
    let counting = MockHttpClient::new(move |request| {
        counter.set(counter.get() + 1);
        inner.call(request)
    });

    let mut client = retry_http_client(counting, 2).unwrap();
    let err = fetch_page_length(&mut client, &format!("http://127.0.0.1:{}/", port)).unwrap_err();

    assert!(matches!(err, HttpError::Transport(_)));
    assert_eq!(attempts.get(), 2);
}

#[test]
fn test_boxed_clients_are_interchangeable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body("from server");
    });

    let mut clients: Vec<Box<dyn HttpClient>> = vec![
        Box::new(client()),
        Box::new(MockHttpClient::from_string("from mock")),
    ];

    let lengths: Vec<usize> = clients
        .iter_mut()
        .map(|client| fetch_page_length(client.as_mut(), &server.url("/")).unwrap())
        .collect();
    assert_eq!(lengths, vec![11, 9]);
}

#[test]
fn test_rewrite_host_sends_matching_host_header() {
    let server = MockServer::start();
    let authority = format!("127.0.0.1:{}", server.address().port());
    let host_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/page")
            .header("host", authority.as_str())
            .header("x-origin", "prebuilt");
        then.status(200).body("ok");
    });

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert("x-origin", HeaderValue::from_static("prebuilt"));
    let prebuilt = reqwest::blocking::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap();

    let mut client =
        rewrite_host_http_client(ReqwestClient::from_client(prebuilt), &authority).unwrap();
    let request = Request::get("http://unreachable.invalid/page")
        .unwrap()
        .with_header(HOST, HeaderValue::from_static("unreachable.invalid"));
    let response = client.execute(request).unwrap();

    host_mock.assert();
    assert_eq!(response.text(), "ok");
}
