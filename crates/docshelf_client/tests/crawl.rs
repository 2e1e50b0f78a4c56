use std::time::Duration;

use docshelf_client::{ApiClient, ApiError, ClientSettings, DocumentService};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let settings = ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    };
    ApiClient::new(&settings).expect("client")
}

#[tokio::test]
async fn crawl_success_returns_the_receipt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crawl"))
        .and(body_json(serde_json::json!({
            "url": "http://x.test",
            "category_id": 1,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "id": 9,
            "title": "X",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = client_for(&server)
        .submit_crawl("http://x.test", Some(1))
        .await
        .expect("crawl ok");

    assert_eq!(receipt.id, Some(9));
    assert_eq!(receipt.title.as_deref(), Some("X"));
}

#[tokio::test]
async fn crawl_without_category_omits_the_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crawl"))
        .and(body_json(serde_json::json!({ "url": "http://x.test" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let receipt = client_for(&server)
        .submit_crawl("http://x.test", None)
        .await
        .expect("crawl ok");

    assert_eq!(receipt.id, None);
}

#[tokio::test]
async fn crawl_rejection_carries_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crawl"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "Failed to crawl URL" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .submit_crawl("http://x.test", Some(1))
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Rejected("Failed to crawl URL".to_string()));
}

#[tokio::test]
async fn crawl_times_out_on_a_slow_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crawl"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({ "success": true })),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    };
    let client = ApiClient::new(&settings).expect("client");

    let err = client.submit_crawl("http://x.test", Some(1)).await.unwrap_err();

    assert_eq!(err, ApiError::Timeout);
}

#[tokio::test]
async fn content_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/content/9"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "content": "# X\n\nbody" })),
        )
        .mount(&server)
        .await;

    let content = client_for(&server).content(9).await.expect("content ok");

    assert_eq!(content, "# X\n\nbody");
}

#[tokio::test]
async fn missing_content_surfaces_the_server_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/content/9"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "error": "Document not found" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).content(9).await.unwrap_err();

    assert_eq!(err, ApiError::Rejected("Document not found".to_string()));
}

#[test]
fn view_url_joins_against_the_base() {
    let settings = ClientSettings {
        base_url: "http://127.0.0.1:8000".to_string(),
        ..ClientSettings::default()
    };
    let client = ApiClient::new(&settings).expect("client");

    assert_eq!(client.view_url(9), "http://127.0.0.1:8000/view/9");
}
