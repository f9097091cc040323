use shared_types::AccessLinkId;
use time::{Duration, OffsetDateTime};

use crate::utils::context::TestContext;

fn wrong_pin(pin: &str) -> String {
    pin.chars()
        .map(|c| if c == '0' { '1' } else { '0' })
        .collect()
}

#[tokio::test]
async fn test_verify_with_correct_pin_returns_token() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let created = context
        .api_as(setup.advocate_id)
        .access_links
        .create(&setup.case_id, 24)
        .await
        .json_value()
        .await;
    let id: AccessLinkId = created["id"].as_str().unwrap().parse().unwrap();
    let pin = created["pin"].as_str().unwrap();

    // WHEN
    let resp = context.api.access_links.verify(&id, pin).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert!(!resp["token"].as_str().unwrap().is_empty());
    assert!(resp["expiresAt"].is_string());
}

#[tokio::test]
async fn test_verify_with_wrong_pin_keeps_link_active() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);
    let created = api
        .access_links
        .create(&setup.case_id, 24)
        .await
        .json_value()
        .await;
    let id: AccessLinkId = created["id"].as_str().unwrap().parse().unwrap();
    let pin = created["pin"].as_str().unwrap();

    // WHEN
    let resp = context.api.access_links.verify(&id, &wrong_pin(pin)).await;

    // THEN
    assert_eq!(resp.status(), 409);
    assert_eq!(resp.json_value().await["code"], "BR_0013");

    let link = api.access_links.get(&id).await.json_value().await;
    assert_eq!(link["status"], "ACTIVE");

    let resp = context.api.access_links.verify(&id, pin).await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_verify_expired_link() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);
    let created = api
        .access_links
        .create(&setup.case_id, 24)
        .await
        .json_value()
        .await;
    let id: AccessLinkId = created["id"].as_str().unwrap().parse().unwrap();
    let pin = created["pin"].as_str().unwrap();
    context
        .db
        .set_access_link_expiry(id, OffsetDateTime::now_utc() - Duration::hours(1))
        .await;

    // WHEN
    let resp = context.api.access_links.verify(&id, pin).await;

    // THEN
    assert_eq!(resp.status(), 409);
    assert_eq!(resp.json_value().await["code"], "BR_0012");

    let link = api.access_links.get(&id).await.json_value().await;
    assert_eq!(link["status"], "EXPIRED");
}

#[tokio::test]
async fn test_get_expires_overdue_link() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);
    let created = api
        .access_links
        .create(&setup.case_id, 24)
        .await
        .json_value()
        .await;
    let id: AccessLinkId = created["id"].as_str().unwrap().parse().unwrap();
    context
        .db
        .set_access_link_expiry(id, OffsetDateTime::now_utc() - Duration::minutes(1))
        .await;

    // WHEN
    let resp = api.access_links.get(&id).await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await["status"], "EXPIRED");
}
