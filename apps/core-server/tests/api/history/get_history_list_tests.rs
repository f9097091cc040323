use shared_types::ClientId;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_get_history_list_for_created_client() {
    // GIVEN
    let context = TestContext::new().await;
    let client_id: ClientId = context
        .api
        .clients
        .create("Mehta Textiles", "accounts@mehta.test", None)
        .await
        .json_value()
        .await["id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    // WHEN
    let resp = context.api.histories.list(client_id).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["totalItems"], 1);
    let entry = &resp["values"][0];
    assert_eq!(entry["action"], "CREATED");
    assert_eq!(entry["entityType"], "CLIENT");
    assert_eq!(entry["entityId"], client_id.to_string());
    assert_eq!(entry["actorId"], context.super_admin_id.to_string());
}

#[tokio::test]
async fn test_get_history_list_as_advocate_is_forbidden() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;

    // WHEN
    let resp = context
        .api_as(setup.advocate_id)
        .histories
        .list(setup.case_id)
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
}
