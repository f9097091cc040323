use shared_types::AccessLinkId;
use time::{Duration, OffsetDateTime};

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_run_expire_task_as_super_admin() {
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
    context
        .db
        .set_access_link_expiry(id, OffsetDateTime::now_utc() - Duration::hours(2))
        .await;

    // WHEN
    let resp = context.api.tasks.run("EXPIRE_ACCESS_LINKS").await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await["expired"], 1);

    let link = context.api.access_links.get(&id).await.json_value().await;
    assert_eq!(link["status"], "EXPIRED");
}

#[tokio::test]
async fn test_run_task_as_advocate_is_forbidden() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;

    // WHEN
    let resp = context
        .api_as(setup.advocate_id)
        .tasks
        .run("EXPIRE_ACCESS_LINKS")
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn test_run_unknown_task() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.tasks.run("DEFRAGMENT").await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0026");
}
