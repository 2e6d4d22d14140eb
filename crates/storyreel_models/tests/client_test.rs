use storyreel_core::ServicesConfig;
use storyreel_error::{GeneratorErrorKind, RetryableError, StoryreelErrorKind};
use storyreel_interface::{StoryboardRenderer, StoryboardRequest};
use storyreel_models::{HttpStoryboardRenderer, ServiceClient, join_url, status_error};

fn services(url: &str) -> ServicesConfig {
    ServicesConfig::builder()
        .story_url(url)
        .storyboard_url(url)
        .api_key_env(Some("STORYREEL_TEST_KEY_THAT_IS_NEVER_SET".to_string()))
        .max_retries(0usize)
        .initial_backoff_ms(1u64)
        .max_delay_secs(1u64)
        .timeout_secs(5u64)
        .build()
        .unwrap()
}

#[test]
fn urls_join_with_one_slash() {
    assert_eq!(join_url("http://a:1", "storyboard"), "http://a:1/storyboard");
    assert_eq!(join_url("http://a:1/", "/story/music"), "http://a:1/story/music");
    assert_eq!(join_url("http://a:1/v2//", "story/extend"), "http://a:1/v2/story/extend");
}

#[test]
fn status_errors_are_classified() {
    let unavailable = status_error(503, "");
    assert!(unavailable.is_retryable());
    assert_eq!(
        unavailable.kind,
        GeneratorErrorKind::HttpStatus {
            status_code: 503,
            message: "Service Unavailable".to_string(),
        }
    );

    assert!(status_error(429, "slow down").is_retryable());
    assert!(!status_error(400, "bad prompt").is_retryable());
    assert!(!status_error(401, "").is_retryable());
}

#[test]
fn long_error_bodies_are_cut() {
    let body = "x".repeat(1000);
    match status_error(500, &body).kind {
        GeneratorErrorKind::HttpStatus { message, .. } => assert_eq!(message.len(), 200),
        other => panic!("unexpected kind: {}", other),
    }
}

#[test]
fn api_key_comes_from_the_environment() {
    let client = ServiceClient::new("http://localhost:8080", &services("http://localhost:8080"))
        .expect("Failed to create client");
    assert!(!client.is_authenticated());
    assert_eq!(client.base_url(), "http://localhost:8080");

    // PATH is set in any test environment
    let with_key = ServicesConfig::builder()
        .api_key_env(Some("PATH".to_string()))
        .build()
        .unwrap();
    let client = ServiceClient::new("http://localhost:8080", &with_key).unwrap();
    assert!(client.is_authenticated());
}

#[test]
fn zero_rate_limit_is_rejected() {
    let config = ServicesConfig::builder()
        .requests_per_minute(0u32)
        .build()
        .unwrap();
    let err = ServiceClient::new("http://localhost:8080", &config).unwrap_err();
    assert!(matches!(err.kind(), StoryreelErrorKind::Config(_)));
}

#[tokio::test]
async fn malformed_url_fails_without_retry() {
    let client = ServiceClient::new("not a url", &services("not a url")).unwrap();
    let err = client
        .post::<_, serde_json::Value>("storyboard", &serde_json::json!({}))
        .await
        .expect_err("Request should fail");
    match err.kind() {
        StoryreelErrorKind::Generator(e) => {
            assert!(matches!(e.kind, GeneratorErrorKind::ClientCreation(_)))
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // nothing listens on port 1
    let renderer = HttpStoryboardRenderer::new(&services("http://127.0.0.1:1")).unwrap();
    let request = StoryboardRequest::builder()
        .prompt("a lighthouse")
        .build()
        .unwrap();

    let err = renderer.render(&request).await.expect_err("Render should fail");
    match err.kind() {
        StoryreelErrorKind::Generator(e) => {
            assert!(matches!(e.kind, GeneratorErrorKind::Transport { .. }));
            assert!(e.is_retryable());
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn retry_strategy_follows_the_failure() {
    let defaults = ServiceClient::new("http://localhost:8080", &ServicesConfig::default()).unwrap();
    assert_eq!(defaults.retry_params(&status_error(429, "")), (5000, 3, 40));
    assert_eq!(defaults.retry_params(&status_error(503, "")), (2000, 5, 60));

    // configured values win over the per-error strategy
    let overridden = ServicesConfig::builder()
        .max_retries(1usize)
        .max_delay_secs(5u64)
        .build()
        .unwrap();
    let client = ServiceClient::new("http://localhost:8080", &overridden).unwrap();
    assert_eq!(client.retry_params(&status_error(429, "")), (5000, 1, 5));
}
