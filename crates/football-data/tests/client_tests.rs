//! HTTP behaviour of `FootballDataClient` against a local mock server.

use std::time::Duration;

use matchday_football_data::{FootballDataClient, FootballTransport, TransportError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = "test-token";
const TIMEOUT: Duration = Duration::from_secs(5);

fn client_for(server: &MockServer) -> FootballDataClient {
    FootballDataClient::new(server.uri(), Some(TEST_KEY.to_string()))
}

// ============================================================================
// SUCCESS
// ============================================================================

#[tokio::test]
async fn test_sends_token_and_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/competitions/PL/teams"))
        .and(query_param("season", "2023"))
        .and(header("X-Auth-Token", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "teams": [{"id": 57, "name": "Arsenal FC"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .fetch("competitions/PL/teams?season=2023", TIMEOUT)
        .await
        .expect("should fetch teams");

    assert_eq!(body["teams"][0]["name"], "Arsenal FC");
}

#[tokio::test]
async fn test_without_key_sends_no_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/57"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 57})))
        .mount(&server)
        .await;

    let client = FootballDataClient::new(server.uri(), None);
    let body = client.fetch("teams/57", TIMEOUT).await.expect("should fetch");
    assert_eq!(body["id"], 57);

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("X-Auth-Token").is_none());
}

// ============================================================================
// STATUS FAILURES
// ============================================================================

async fn status_error(status: u16, body: &str) -> TransportError {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;

    client_for(&server)
        .fetch("competitions/PL/standings?season=2023", TIMEOUT)
        .await
        .expect_err("non-success status should fail")
}

#[tokio::test]
async fn test_rate_limited_status() {
    let error = status_error(429, r#"{"message":"You reached your request limit."}"#).await;
    match error {
        TransportError::Status { status, message } => {
            assert_eq!(status, 429);
            assert!(message.contains("request limit"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_forbidden_status() {
    let error = status_error(403, "").await;
    assert_eq!(
        error,
        TransportError::Status {
            status: 403,
            message: "Forbidden".to_string()
        }
    );
}

#[tokio::test]
async fn test_not_found_status() {
    let error = status_error(404, "").await;
    assert!(matches!(error, TransportError::Status { status: 404, .. }));
}

// ============================================================================
// TRANSPORT FAILURES
// ============================================================================

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .fetch("teams/57", TIMEOUT)
        .await
        .expect_err("html body should not decode");
    assert!(matches!(error, TransportError::Decode(_)));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 57}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .fetch("teams/57", Duration::from_millis(100))
        .await
        .expect_err("request should time out");
    assert_eq!(error, TransportError::Timeout);
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Port 9 (discard) is not expected to be listening locally.
    let client = FootballDataClient::new("http://127.0.0.1:9", Some(TEST_KEY.to_string()));

    let error = client
        .fetch("teams/57", TIMEOUT)
        .await
        .expect_err("connection should fail");
    assert!(matches!(error, TransportError::Network(_)));
}
