use serde_json::json;
use shared_types::{CaseId, ClientId};

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_advocate_creates_client_case_and_hearing() {
    // GIVEN
    let context = TestContext::new().await;
    let advocate_id = context.db.create_advocate("advocate@lexdesk.test").await;
    let api = context.api_as(advocate_id);

    // WHEN
    let resp = api
        .clients
        .create("Vikram Mehta", "vikram@example.com", None)
        .await;
    assert_eq!(resp.status(), 201);
    let client_id: ClientId = resp.json_value().await["id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    let resp = api
        .cases
        .create(&client_id, "Mehta v. State", "CS/114/2026")
        .await;
    assert_eq!(resp.status(), 201);
    let case_id: CaseId = resp.json_value().await["id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    let resp = api
        .cases
        .create_hearing(&case_id, "2026-04-15T09:30:00+05:30", "Framing of issues")
        .await;
    assert_eq!(resp.status(), 201);

    // THEN
    let resp = api.cases.get(&case_id).await;
    assert_eq!(resp.status(), 200);
    let case = resp.json_value().await;
    assert_eq!(case["ownerId"], advocate_id.to_string());
    assert_eq!(case["clientId"], client_id.to_string());
    assert_eq!(case["caseNumber"], "CS/114/2026");

    let hearings = api.cases.list_hearings(&case_id).await.json_value().await;
    assert_eq!(hearings.as_array().unwrap().len(), 1);
    assert_eq!(hearings[0]["title"], "Framing of issues");
}

#[tokio::test]
async fn test_advocate_cannot_read_foreign_case() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let other_advocate = context.db.create_advocate("other@lexdesk.test").await;

    // WHEN
    let foreign = context.api_as(other_advocate).cases.get(&setup.case_id).await;
    let own = context
        .api_as(setup.advocate_id)
        .cases
        .get(&setup.case_id)
        .await;
    let as_super_admin = context.api.cases.get(&setup.case_id).await;

    // THEN
    assert_eq!(foreign.status(), 403);
    assert_eq!(own.status(), 200);
    assert_eq!(as_super_admin.status(), 200);
}

#[tokio::test]
async fn test_comment_with_attachments() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);

    // WHEN
    let resp = api
        .cases
        .create_comment(
            &setup.case_id,
            json!({
                "text": "Filed the written statement",
                "attachments": [{
                    "fileName": "statement.pdf",
                    "mediaType": "application/pdf",
                    "size": 20480,
                    "storageKey": "cases/statement.pdf"
                }]
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let comments = api
        .cases
        .list_comments(&setup.case_id)
        .await
        .json_value()
        .await;
    assert_eq!(comments.as_array().unwrap().len(), 1);
    assert_eq!(comments[0]["author"]["type"], "ADMIN");
    assert_eq!(comments[0]["author"]["id"], setup.advocate_id.to_string());
    assert_eq!(comments[0]["attachments"][0]["fileName"], "statement.pdf");
    assert_eq!(comments[0]["attachments"][0]["size"], 20480);
}

#[tokio::test]
async fn test_empty_comment_is_rejected() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;

    // WHEN
    let resp = context
        .api_as(setup.advocate_id)
        .cases
        .create_comment(&setup.case_id, json!({ "text": "   " }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0015");
}
