//! API integration tests.
//!
//! The router is exercised with `tower::ServiceExt::oneshot`; every provider
//! client points at a wiremock server so upstream behavior is scripted per
//! test.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tubepost_ai::{AiClient, AiConfig};
use tubepost_api::{create_router, ApiConfig, AppState};
use tubepost_images::{ImageClient, ImagesConfig};
use tubepost_seo::{SeoClient, SeoConfig};
use tubepost_youtube::{YoutubeClient, YoutubeConfig};

fn test_state(server: &MockServer) -> AppState {
    let timeout = Duration::from_secs(5);

    let youtube = YoutubeClient::new(YoutubeConfig {
        api_base: format!("{}/youtube/v3", server.uri()),
        api_key: "yt-key".to_string(),
        captions_base: format!("{}/timedtext", server.uri()),
        default_lang: "en".to_string(),
        timeout,
    })
    .expect("youtube client");

    let ai = AiClient::new(AiConfig {
        base_url: format!("{}/ai/v1", server.uri()),
        api_key: "ai-key".to_string(),
        timeout,
        ..AiConfig::default()
    })
    .expect("ai client");

    let seo = SeoClient::new(SeoConfig {
        endpoint: format!("{}/seo/", server.uri()),
        api_key: "seo-key".to_string(),
        timeout,
        ..SeoConfig::default()
    })
    .expect("seo client");

    let images = ImageClient::new(ImagesConfig {
        openai_base: format!("{}/openai/v1", server.uri()),
        openai_api_key: "img-key".to_string(),
        unsplash_base: format!("{}/unsplash", server.uri()),
        unsplash_access_key: "stock-key".to_string(),
        timeout,
        ..ImagesConfig::default()
    })
    .expect("image client");

    AppState::new(ApiConfig::default(), youtube, ai, seo, images)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let server = MockServer::start().await;
    let app = create_router(test_state(&server));

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn missing_url_parameter_is_a_bad_request() {
    let server = MockServer::start().await;
    let app = create_router(test_state(&server));

    let response = app.oneshot(get("/api/youtube")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("URL is required"));
}

#[tokio::test]
async fn invalid_youtube_url_is_a_bad_request() {
    let server = MockServer::start().await;
    let app = create_router(test_state(&server));

    let response = app
        .oneshot(get("/api/youtube?url=https://vimeo.com/42"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn resolves_video_metadata_and_transcript() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{ "snippet": { "title": "A Video", "description": "About stuff" } }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/timedtext"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<transcript><text start="0" dur="1">caption one</text><text start="1" dur="1">caption two</text></transcript>"#,
        ))
        .mount(&server)
        .await;

    let app = create_router(test_state(&server));
    let response = app
        .oneshot(get("/api/youtube?url=https://youtu.be/dQw4w9WgXcQ"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "A Video");
    assert_eq!(json["description"], "About stuff");
    assert_eq!(json["transcript"], "caption one caption two");
}

#[tokio::test]
async fn upstream_fetch_failure_is_an_internal_error() {
    let server = MockServer::start().await;
    // No mocks: both resolver calls 404.

    let app = create_router(test_state(&server));
    let response = app
        .oneshot(get("/api/youtube?url=https://youtu.be/dQw4w9WgXcQ"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn transcript_endpoint_validates_its_input() {
    let server = MockServer::start().await;
    let app = create_router(test_state(&server));

    let response = app
        .clone()
        .oneshot(get("/api/youtube/transcript"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(get("/api/youtube/transcript?videoId=short"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn transcript_endpoint_returns_flattened_captions() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/timedtext"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<transcript><text start="0" dur="1">hello</text><text start="1" dur="1">there</text></transcript>"#,
        ))
        .mount(&server)
        .await;

    let app = create_router(test_state(&server));
    let response = app
        .oneshot(get("/api/youtube/transcript?videoId=dQw4w9WgXcQ"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["transcript"], "hello there");
}

#[tokio::test]
async fn generate_survives_every_upstream_failing() {
    let server = MockServer::start().await;
    // No mocks at all: completion, metrics, generation and stock calls fail.

    let app = create_router(test_state(&server));
    let request = serde_json::json!({
        "title": "Never Gonna Give You Up",
        "description": "Official music video",
        "transcript": "never gonna give you up",
        "videoId": "dQw4w9WgXcQ"
    });

    let response = app
        .oneshot(post_json("/api/generate", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;

    // Synthesized article from the inputs
    assert_eq!(json["title"], "SEO-Optimized: Never Gonna Give You Up");
    assert!(json["content"]
        .as_str()
        .unwrap()
        .contains("Official music video"));
    assert_eq!(json["keywords"].as_array().unwrap().len(), 5);
    assert_eq!(json["recovery"], "synthesized");

    // Estimated metrics, always complete
    let score = json["seoAnalysis"]["score"].as_u64().unwrap();
    assert!((70..100).contains(&score));
    assert_eq!(json["seoAnalysis"]["origin"], "estimated");

    // One placeholder per description, carrying the description
    let images = json["images"].as_array().unwrap();
    let descriptions = json["imageDescriptions"].as_array().unwrap();
    assert_eq!(images.len(), 5);
    for (image, description) in images.iter().zip(descriptions) {
        let url = image["url"].as_str().unwrap();
        let description = description.as_str().unwrap();
        assert!(url.starts_with("/placeholder.svg"));
        assert!(url.contains(&*urlencoding::encode(description)));
        assert_eq!(image["alt"], description);
    }

    assert_eq!(json["videoId"], "dQw4w9WgXcQ");
}

#[tokio::test]
async fn generate_merges_article_metrics_and_images() {
    let server = MockServer::start().await;

    let article = serde_json::json!({
        "title": "Strict Title",
        "content": "<h1>Strict</h1>",
        "keywords": ["rust", "tokio", "axum", "serde", "tracing"],
        "imageDescriptions": ["d1", "d2", "d3", "d4", "d5"]
    });
    Mock::given(method("POST"))
        .and(path("/ai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{ "message": { "content": article.to_string() } }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/seo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "score": 84,
            "difficulty": "Easy",
            "searchVolume": "1200 monthly searches",
            "cpc": "$0.80",
            "competition": "0.31"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{ "url": "https://img.example/gen.png" }]
        })))
        .mount(&server)
        .await;

    let app = create_router(test_state(&server));
    let request = serde_json::json!({
        "title": "t",
        "description": "d",
        "transcript": "x",
        "videoId": "dQw4w9WgXcQ"
    });

    let response = app
        .oneshot(post_json("/api/generate", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Strict Title");
    assert_eq!(json["recovery"], "strict");
    assert_eq!(json["seoAnalysis"]["score"], 84);
    assert_eq!(json["seoAnalysis"]["origin"], "measured");
    assert_eq!(json["images"].as_array().unwrap().len(), 5);
    assert_eq!(json["images"][0]["url"], "https://img.example/gen.png");
    assert_eq!(json["images"][2]["alt"], "d3");
}

#[tokio::test]
async fn extended_mode_failure_surfaces_as_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{ "message": { "content": "this is not the requested JSON" } }]
        })))
        .mount(&server)
        .await;

    let app = create_router(test_state(&server));
    let request = serde_json::json!({
        "title": "t",
        "description": "d",
        "transcript": "x",
        "videoId": "dQw4w9WgXcQ",
        "mode": "extended"
    });

    let response = app
        .oneshot(post_json("/api/generate", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert!(json["error"].is_string());
}
