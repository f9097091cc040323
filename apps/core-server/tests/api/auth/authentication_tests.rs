use shared_types::AdminId;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_missing_bearer_token_is_unauthorized() {
    // GIVEN
    let context = TestContext::new().await;
    let api = context.api_with_token("", Some(context.super_admin_id));

    // WHEN
    let resp = api.clients.list().await;

    // THEN
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_wrong_bearer_token_is_unauthorized() {
    // GIVEN
    let context = TestContext::new().await;
    let api = context.api_with_token("not-the-token", Some(context.super_admin_id));

    // WHEN
    let resp = api.clients.list().await;

    // THEN
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_missing_actor_header_is_unauthorized() {
    // GIVEN
    let context = TestContext::new().await;
    let api = context.api_with_token(crate::fixtures::AUTH_TOKEN, None);

    // WHEN
    let resp = api.clients.list().await;

    // THEN
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_unknown_actor_is_forbidden() {
    // GIVEN
    let context = TestContext::new().await;
    let api = context.api_as(AdminId::new_v4());

    // WHEN
    let resp = api.clients.list().await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert_eq!(resp.json_value().await["code"], "BR_0008");
}

#[tokio::test]
async fn test_public_endpoints_need_no_back_office_token() {
    // GIVEN
    let context = TestContext::new().await;
    let api = context.api_with_token("", None);

    // WHEN
    let health = api.other.health().await;
    let verify = api
        .access_links
        .verify(&shared_types::AccessLinkId::new_v4(), "123456")
        .await;

    // THEN
    assert_eq!(health.status(), 204);
    assert_eq!(verify.status(), 404);
    assert_eq!(verify.json_value().await["code"], "BR_0005");
}
