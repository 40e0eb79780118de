use fetchkit_core::{
    Contract, Error, Fetcher, Method, MockTransport, NoParameters, ResponseOutcome,
};
use futures::executor::block_on;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct SearchQuery {
    text: String,
    per_page: u32,
    page: u32,
}

#[derive(Debug, PartialEq, Deserialize)]
struct SearchPage {
    page: u32,
    total: String,
}

fn contract() -> Contract {
    Contract::new("http://localhost:8080", Method::Get).with_debug(false)
}

fn query() -> SearchQuery {
    SearchQuery { text: "owl".into(), per_page: 50, page: 1 }
}

#[test]
fn fetch_decodes_a_validated_body() {
    let transport = MockTransport::new().fallback(ResponseOutcome::http(
        200,
        Default::default(),
        br#"{"page":1,"total":"42"}"#.to_vec(),
    ));
    let fetcher = Fetcher::new(transport);
    let page: SearchPage = block_on(fetcher.fetch(
        &contract(),
        "services/rest",
        Some(&query()),
        None::<&NoParameters>,
        None::<&NoParameters>,
    ))
    .unwrap();
    assert_eq!(page, SearchPage { page: 1, total: "42".into() });

    let seen = fetcher.transport().requests();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].url.path(), "/services/rest");
    let query_pairs: Vec<(String, String)> = seen[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(query_pairs.contains(&("text".to_string(), "owl".to_string())));
    assert!(query_pairs.contains(&("per_page".to_string(), "50".to_string())));
    assert!(query_pairs.contains(&("page".to_string(), "1".to_string())));
}

#[test]
fn transport_failures_surface_as_transport_errors() {
    let transport = MockTransport::new()
        .on_failure("http://localhost:8080/services/rest", "connection refused");
    let fetcher = Fetcher::new(transport);
    let result: fetchkit_core::Result<SearchPage> = block_on(fetcher.fetch(
        &contract(),
        "services/rest",
        None::<&NoParameters>,
        None::<&NoParameters>,
        None::<&NoParameters>,
    ));
    let err = result.unwrap_err();
    match err {
        Error::Transport(detail) => assert!(detail.contains("connection refused")),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn malformed_hosts_never_reach_the_transport() {
    let transport = MockTransport::new();
    let fetcher = Fetcher::new(transport);
    let result: fetchkit_core::Result<SearchPage> = block_on(fetcher.fetch(
        &Contract::new("", Method::Get).with_debug(false),
        "services/rest",
        None::<&NoParameters>,
        None::<&NoParameters>,
        None::<&NoParameters>,
    ));
    let err = result.unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
    assert!(fetcher.transport().requests().is_empty());
}

#[test]
fn invalid_statuses_fail_before_decoding() {
    let transport = MockTransport::new().fallback(ResponseOutcome::http(
        401,
        Default::default(),
        br#"{"message":"login required"}"#.to_vec(),
    ));
    let fetcher = Fetcher::new(transport);
    let result: fetchkit_core::Result<SearchPage> = block_on(fetcher.fetch(
        &contract(),
        "services/rest",
        None::<&NoParameters>,
        None::<&NoParameters>,
        None::<&NoParameters>,
    ));
    let err = result.unwrap_err();
    match err {
        Error::StatusCode { code, data, .. } => {
            assert_eq!(code, 401);
            assert_eq!(data, br#"{"message":"login required"}"#);
        }
        other => panic!("expected status code error, got {other:?}"),
    }
}

#[test]
fn non_http_replies_fail_validation_regardless_of_body() {
    let transport = MockTransport::new()
        .fallback(ResponseOutcome::non_http(br#"{"page":1,"total":"42"}"#.to_vec()));
    let fetcher = Fetcher::new(transport);
    let result: fetchkit_core::Result<SearchPage> = block_on(fetcher.fetch(
        &contract(),
        "services/rest",
        None::<&NoParameters>,
        None::<&NoParameters>,
        None::<&NoParameters>,
    ));
    let err = result.unwrap_err();
    assert!(matches!(err, Error::NonHttpResponse));
}

#[test]
fn decode_failures_carry_the_raw_body() {
    let transport = MockTransport::new().fallback(ResponseOutcome::http(
        200,
        Default::default(),
        b"<html>gateway</html>".to_vec(),
    ));
    let fetcher = Fetcher::new(transport);
    let result: fetchkit_core::Result<SearchPage> = block_on(fetcher.fetch(
        &contract(),
        "services/rest",
        None::<&NoParameters>,
        None::<&NoParameters>,
        None::<&NoParameters>,
    ));
    let err = result.unwrap_err();
    match err {
        Error::Decoding { data, .. } => assert_eq!(data, b"<html>gateway</html>"),
        other => panic!("expected decoding error, got {other:?}"),
    }
}

#[test]
fn request_returns_raw_bytes_for_non_json_consumers() {
    let transport = MockTransport::new().fallback(ResponseOutcome::http(
        200,
        Default::default(),
        vec![0xff, 0xd8, 0xff, 0xe0],
    ));
    let fetcher = Fetcher::new(transport);
    let bytes = block_on(fetcher.request(
        &contract(),
        "photos/51008667108.jpg",
        None::<&NoParameters>,
        None::<&NoParameters>,
        None::<&NoParameters>,
    ))
    .unwrap();
    assert_eq!(bytes, vec![0xff, 0xd8, 0xff, 0xe0]);
}
