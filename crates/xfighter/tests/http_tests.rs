/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for client construction and response classification
[POS]:    Integration tests - HTTP transport and decoder
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{TEST_API_KEY, client_for, setup_mock_server};
use rstest::rstest;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};
use xfighter::{ClientConfig, ErrorKind, XfighterClient, XfighterError};

#[test]
fn test_client_creation() {
    let client = assert_ok!(XfighterClient::new());
    assert!(!client.has_api_key());
    assert_eq!(
        client.base_url().as_str(),
        "https://api.stockfighter.io/ob/api"
    );
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::new(TEST_API_KEY);
    let client = assert_ok!(XfighterClient::with_config(config));
    assert!(client.has_api_key());
}

#[tokio::test]
async fn test_api_key_header_attached() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/venues/TESTEX/heartbeat"))
        .and(header("X-Starfighter-Authorization", TEST_API_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"ok": true, "venue": "TESTEX"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let up = assert_ok!(client.venue_heartbeat("TESTEX").await);
    assert!(up);
}

#[tokio::test]
async fn test_connection_error_when_nothing_listens() {
    let config = ClientConfig::new(TEST_API_KEY);
    let client = assert_ok!(XfighterClient::with_config_and_base_url(
        config,
        "http://127.0.0.1:1"
    ));

    let err = client.heartbeat().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Connection);
    assert!(err.to_string().starts_with("connection error"));
}

#[rstest]
#[case(200, "not json at all", ErrorKind::InvalidJson)]
#[case(200, r#"{"ok": false, "error": "venue is closed"}"#, ErrorKind::Request)]
#[case(500, r#"{"ok": true}"#, ErrorKind::UnhandledApiResponse)]
#[case(200, r#"{"ok": true, "symbol": "FOO"}"#, ErrorKind::UnhandledApiResponse)]
#[tokio::test]
async fn test_quote_error_classification(
    #[case] status: u16,
    #[case] body: &str,
    #[case] kind: ErrorKind,
) {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/venues/TESTEX/stocks/FOO/quote"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;

    let err = client_for(&server).quote("TESTEX", "FOO").await.unwrap_err();

    assert_eq!(err.kind(), kind);
    if let XfighterError::InvalidJson { body: offending } = &err {
        assert_eq!(offending, body);
    }
}
