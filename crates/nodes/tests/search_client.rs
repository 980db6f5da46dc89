use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nodes::giphy::{GiphyConfig, HttpSearchClient, Mode};
use nodes::mock::{FixedIndex, RecordingNotices};
use nodes::{ExecutionContext, GifSearchClient, GiphyNode, NodeError};

fn config_for(server: &MockServer) -> GiphyConfig {
    GiphyConfig {
        endpoint: format!("{}/v1/gifs/search", server.uri()),
        ..GiphyConfig::default()
    }
}

#[tokio::test]
async fn sends_key_query_and_language() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .and(query_param("api_key", "secret-key"))
        .and(query_param("q", "happy cats"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "abc", "title": "Cat", "rating": "g" }],
            "meta": { "status": 200 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpSearchClient::new(&config_for(&server)).unwrap();
    let body = client.search("secret-key", "happy cats").await.unwrap();

    assert_eq!(body["data"][0]["id"], "abc");
    assert_eq!(body["meta"]["status"], 200);
}

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "message": "Invalid authentication credentials" })),
        )
        .mount(&server)
        .await;

    let client = HttpSearchClient::new(&config_for(&server)).unwrap();
    let err = client.search("bad-key", "cats").await.unwrap_err();

    match err {
        NodeError::Transport(msg) => {
            assert!(msg.contains("401"), "unexpected message: {msg}");
            assert!(!msg.contains("bad-key"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = HttpSearchClient::new(&config_for(&server)).unwrap();
    let err = client.search("k", "cats").await.unwrap_err();

    assert!(matches!(err, NodeError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let config = GiphyConfig {
        endpoint: "http://127.0.0.1:1/v1/gifs/search".into(),
        timeout_secs: Some(5),
        ..GiphyConfig::default()
    };

    let client = HttpSearchClient::new(&config).unwrap();
    let err = client.search("k", "cats").await.unwrap_err();

    assert!(matches!(err, NodeError::Transport(_)));
}

#[tokio::test]
async fn node_lists_live_results_end_to_end() {
    let server = MockServer::start().await;

    let body = json!({
        "data": [
            { "id": "a1", "title": "One", "rating": "g" },
            { "title": "No id", "rating": "pg" },
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .and(query_param("q", "cats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let mut secrets = HashMap::new();
    secrets.insert("GIPHY".to_string(), "live-key".to_string());

    let client = HttpSearchClient::new(&config_for(&server)).unwrap();
    let notices = Arc::new(RecordingNotices::new());
    let node = GiphyNode::new(Arc::new(client), Arc::new(secrets))
        .with_mode(Mode::AllResults)
        .with_notices(notices.clone())
        .with_index_source(Arc::new(FixedIndex(0)));

    let out = node.run("cats", &ExecutionContext::live()).await.unwrap();

    let gifs = out.gif_list.unwrap();
    assert_eq!(gifs.len(), 2);
    assert_eq!(gifs[0].url, "https://media.giphy.com/media/a1/giphy.gif");
    assert_eq!(gifs[1].id, "");
    assert_eq!(gifs[1].img, "<img src=\"\"/>");
    assert_eq!(out.output_json, Some(body));
    assert_eq!(notices.all().len(), 1);
}
