use docshelf_client::{
    ApiClient, ApiError, ClientSettings, DocumentQuery, DocumentService,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let settings = ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    };
    ApiClient::new(&settings).expect("client")
}

#[tokio::test]
async fn listing_sends_only_the_present_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents"))
        .and(query_param("q", " rust "))
        .and(query_param("category", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let query = DocumentQuery::from_inputs(" rust ".to_string(), Some(3));
    let documents = client_for(&server).documents(&query).await.expect("list ok");

    assert!(documents.is_empty());
}

#[tokio::test]
async fn unfiltered_listing_sends_no_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents"))
        .and(query_param_is_missing("q"))
        .and(query_param_is_missing("category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 7,
                "url": "http://example.com/a",
                "title": "A page",
                "category_name": "Tech",
                "created_at": "2026-08-06 10:00:00",
            },
            {
                "id": 8,
                "url": "http://example.com/b",
                "title": null,
                "category_name": null,
                "created_at": "2026-08-06T11:00:00Z",
            },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let query = DocumentQuery::from_inputs(String::new(), None);
    let documents = client_for(&server).documents(&query).await.expect("list ok");

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].title.as_deref(), Some("A page"));
    assert_eq!(documents[1].title, None);
    assert_eq!(documents[1].category_name, None);
}

#[tokio::test]
async fn delete_accepts_an_explicit_success_flag() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/documents/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .mount(&server)
        .await;

    client_for(&server).delete_document(7).await.expect("delete ok");
}

#[tokio::test]
async fn delete_accepts_a_bare_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/documents/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client_for(&server).delete_document(7).await.expect("delete ok");
}

#[tokio::test]
async fn delete_missing_document_surfaces_the_server_text() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/documents/7"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "error": "Document not found" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).delete_document(7).await.unwrap_err();

    assert_eq!(err, ApiError::Rejected("Document not found".to_string()));
}

#[tokio::test]
async fn assign_category_puts_the_new_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/documents/7/category"))
        .and(body_json(serde_json::json!({ "category_id": 2 })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .assign_category(7, 2)
        .await
        .expect("assign ok");
}
