//! Integration tests for `SeoClient` using wiremock HTTP mocks.

use std::time::Duration;

use tubepost_models::{Difficulty, MetricsOrigin};
use tubepost_seo::{SeoClient, SeoConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> SeoClient {
    SeoClient::new(SeoConfig {
        endpoint: format!("{}/seo-content-analysis/", server.uri()),
        api_key: "test-key".to_string(),
        api_host: "seo-analysis.p.rapidapi.com".to_string(),
        timeout: Duration::from_secs(5),
    })
    .expect("client construction should not fail")
}

#[tokio::test]
async fn provider_response_is_tagged_measured() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "score": 91,
        "difficulty": "Hard",
        "searchVolume": "8800 monthly searches",
        "cpc": "$1.20",
        "competition": "0.66",
        "trends": [1.0, 2.0],
        "relatedKeywords": ["rust", "tokio"]
    });

    Mock::given(method("GET"))
        .and(path("/seo-content-analysis/"))
        .and(query_param("keyword", "rust"))
        .and(query_param("relatedkeywords", "rust|SEO|Content"))
        .and(header("X-RapidAPI-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let analysis = test_client(&server).analyze("rust").await;

    assert_eq!(analysis.origin, MetricsOrigin::Measured);
    assert_eq!(analysis.score, 91);
    assert_eq!(analysis.difficulty, Difficulty::Hard);
    assert_eq!(analysis.volume, "8800 monthly searches");
    assert_eq!(analysis.cpc, "$1.20");
    assert_eq!(analysis.competition, "0.66");
    assert_eq!(analysis.trends, vec![1.0, 2.0]);
    assert_eq!(analysis.related_keywords, vec!["rust", "tokio"]);
}

#[tokio::test]
async fn omitted_fields_are_filled_in_without_flipping_origin() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seo-content-analysis/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"score": 75})))
        .mount(&server)
        .await;

    let analysis = test_client(&server).analyze("rust").await;

    assert_eq!(analysis.origin, MetricsOrigin::Measured);
    assert_eq!(analysis.score, 75);
    // Substituted fields are present and provider-shaped
    assert!(analysis.volume.ends_with(" monthly searches"));
    assert!(analysis.cpc.starts_with('$'));
    assert!(analysis.competition.parse::<f64>().is_ok());
    assert!(analysis.trends.is_empty());
}

#[tokio::test]
async fn provider_failure_yields_estimated_analysis() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seo-content-analysis/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let analysis = test_client(&server).analyze("rust").await;

    assert_eq!(analysis.origin, MetricsOrigin::Estimated);
    assert!((70..100).contains(&analysis.score));
    assert!(analysis.volume.ends_with(" monthly searches"));
}

#[tokio::test]
async fn empty_keyword_still_returns_a_complete_analysis() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seo-content-analysis/"))
        .and(query_param("keyword", ""))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let analysis = test_client(&server).analyze("").await;

    assert_eq!(analysis.origin, MetricsOrigin::Estimated);
    assert!((70..100).contains(&analysis.score));
    assert!(!analysis.cpc.is_empty());
    assert!(!analysis.competition.is_empty());
}
