use crate::utils::context::TestContext;

#[tokio::test]
async fn test_technical_endpoints() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let health = context.api.other.health().await;
    let build_info = context.api.other.build_info().await;
    let metrics = context.api.other.metrics().await;

    // THEN
    assert_eq!(health.status(), 204);
    assert_eq!(build_info.status(), 200);
    assert!(build_info.json_value().await["version"].is_string());
    assert_eq!(metrics.status(), 200);
}
