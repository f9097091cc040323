use shared_types::AdminId;
use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_super_admin_creates_advocate() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .admins
        .create("Meera Iyer", "Meera.Iyer@Example.com", "ADVOCATE")
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let id: Uuid = resp.json_value().await["id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    let resp = context.api.admins.get(&AdminId::from(id)).await;
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["name"], "Meera Iyer");
    assert_eq!(resp["email"], "meera.iyer@example.com");
    assert_eq!(resp["role"], "ADVOCATE");
    assert_eq!(resp["active"], true);
}

#[tokio::test]
async fn test_duplicate_admin_email_conflicts() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .api
        .admins
        .create("Meera Iyer", "meera@example.com", "ADVOCATE")
        .await;

    // WHEN
    let resp = context
        .api
        .admins
        .create("Meera I.", "MEERA@example.com", "ADVOCATE")
        .await;

    // THEN
    assert_eq!(resp.status(), 409);
    assert_eq!(resp.json_value().await["code"], "BR_0022");
}

#[tokio::test]
async fn test_advocate_cannot_manage_admins() {
    // GIVEN
    let context = TestContext::new().await;
    let advocate_id = context.db.create_advocate("advocate@lexdesk.test").await;
    let api = context.api_as(advocate_id);

    // WHEN
    let create = api
        .admins
        .create("Someone", "someone@example.com", "SUPER_ADMIN")
        .await;
    let list = api.admins.list(0, 10).await;

    // THEN
    assert_eq!(create.status(), 403);
    assert_eq!(list.status(), 403);
}

#[tokio::test]
async fn test_admin_list_pagination() {
    // GIVEN
    let context = TestContext::new().await;
    context.db.create_advocate("a@lexdesk.test").await;
    context.db.create_advocate("b@lexdesk.test").await;

    // WHEN
    let resp = context.api.admins.list(0, 2).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["totalItems"], 3);
    assert_eq!(resp["totalPages"], 2);
    assert_eq!(resp["values"].as_array().unwrap().len(), 2);
}
