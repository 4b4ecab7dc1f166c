//! Integration tests for `ImageClient` using wiremock HTTP mocks.

use std::time::Duration;

use tubepost_images::{ImageClient, ImageStrategy, ImagesConfig};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> ImageClient {
    ImageClient::new(ImagesConfig {
        openai_base: format!("{}/v1", server.uri()),
        openai_api_key: "test-openai-key".to_string(),
        unsplash_base: format!("{}/unsplash", server.uri()),
        unsplash_access_key: "test-unsplash-key".to_string(),
        timeout: Duration::from_secs(5),
        ..ImagesConfig::default()
    })
    .expect("client construction should not fail")
}

fn descriptions(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn generated_images_come_back_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{ "url": "https://img.example/generated.png" }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let input = descriptions(&["first scene", "second scene", "third scene"]);
    let assets = client.provision(&input, ImageStrategy::Generative).await;

    assert_eq!(assets.len(), 3);
    for (asset, description) in assets.iter().zip(&input) {
        assert_eq!(asset.url, "https://img.example/generated.png");
        assert_eq!(&asset.alt, description);
    }
}

#[tokio::test]
async fn generation_failure_falls_back_to_stock() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/unsplash/photos/random"))
        .and(query_param("query", "sunset over hills"))
        .and(query_param("client_id", "test-unsplash-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "urls": { "regular": "https://images.unsplash.example/abc" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let assets = client
        .provision(&descriptions(&["sunset over hills"]), ImageStrategy::Generative)
        .await;

    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].url, "https://images.unsplash.example/abc");
    assert_eq!(assets[0].alt, "sunset over hills");
}

#[tokio::test]
async fn every_failure_resolves_to_a_placeholder_per_description() {
    let server = MockServer::start().await;
    // No mocks mounted: every provider call 404s.

    let client = test_client(&server);
    let input = descriptions(&["desc one", "desc two", "desc three", "desc four", "desc five"]);
    let assets = client.provision(&input, ImageStrategy::Generative).await;

    assert_eq!(assets.len(), 5);
    for (i, (asset, description)) in assets.iter().zip(&input).enumerate() {
        assert_eq!(&asset.alt, description);
        assert!(
            asset.url.contains(&*urlencoding::encode(description)),
            "placeholder url should carry the description: {}",
            asset.url
        );
        assert!(asset.url.contains(&format!("index={}", i + 1)));
        assert!(asset.url.starts_with("/placeholder.svg"));
    }
}

#[tokio::test]
async fn one_failing_description_does_not_poison_the_batch() {
    let server = MockServer::start().await;

    // Generation succeeds only for the first description.
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .and(body_partial_json(serde_json::json!({ "prompt": "works" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{ "url": "https://img.example/works.png" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let input = descriptions(&["works", "fails"]);
    let assets = client.provision(&input, ImageStrategy::Generative).await;

    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].url, "https://img.example/works.png");
    assert_eq!(assets[0].alt, "works");
    assert!(assets[1].url.starts_with("/placeholder.svg"));
    assert_eq!(assets[1].alt, "fails");
}

#[tokio::test]
async fn stock_only_never_calls_the_generation_endpoint() {
    let server = MockServer::start().await;

    // A generation call would panic the test via expect(0).
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/unsplash/photos/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "urls": { "regular": "https://images.unsplash.example/stock" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let assets = client
        .provision(&descriptions(&["anything"]), ImageStrategy::StockOnly)
        .await;

    assert_eq!(assets[0].url, "https://images.unsplash.example/stock");
}

#[tokio::test]
async fn empty_input_yields_empty_batch() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    let assets = client.provision(&[], ImageStrategy::Generative).await;
    assert!(assets.is_empty());
}
