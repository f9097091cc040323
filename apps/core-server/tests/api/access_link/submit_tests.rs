use serde_json::{Value, json};
use shared_types::{AccessLinkId, AdminId, CaseId};

use crate::utils::context::TestContext;

fn submission() -> Value {
    json!({
        "text": "Signed statement attached",
        "attachments": [{
            "fileName": "statement.pdf",
            "mediaType": "application/pdf",
            "size": 1024,
            "storageKey": "uploads/statement.pdf"
        }]
    })
}

async fn create_and_verify(
    context: &TestContext,
    advocate: AdminId,
    case: &CaseId,
) -> (AccessLinkId, String) {
    let created = context
        .api_as(advocate)
        .access_links
        .create(case, 24)
        .await
        .json_value()
        .await;
    let id: AccessLinkId = created["id"].as_str().unwrap().parse().unwrap();

    let verified = context
        .api
        .access_links
        .verify(&id, created["pin"].as_str().unwrap())
        .await
        .json_value()
        .await;

    (id, verified["token"].as_str().unwrap().to_owned())
}

#[tokio::test]
async fn test_submit_consumes_link_once() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let (id, token) = create_and_verify(&context, setup.advocate_id, &setup.case_id).await;
    let counterparty = context.api_with_token(&token, None);

    // WHEN
    let resp = counterparty.access_links.submit(submission()).await;

    // THEN
    assert_eq!(resp.status(), 201);
    let receipt = resp.json_value().await;
    assert_eq!(receipt["linkId"], id.to_string());
    assert_eq!(receipt["attachmentCount"], 1);

    let api = context.api_as(setup.advocate_id);
    let link = api.access_links.get(&id).await.json_value().await;
    assert_eq!(link["status"], "USED");

    let comments = api
        .cases
        .list_comments(&setup.case_id)
        .await
        .json_value()
        .await;
    assert_eq!(comments.as_array().unwrap().len(), 1);
    assert_eq!(comments[0]["id"], receipt["commentId"]);
    assert_eq!(comments[0]["author"]["type"], "ACCESS_LINK");
    assert_eq!(comments[0]["author"]["id"], id.to_string());
    assert_eq!(comments[0]["text"], "Signed statement attached");

    let again = counterparty.access_links.submit(submission()).await;
    assert_eq!(again.status(), 409);
    assert_eq!(again.json_value().await["code"], "BR_0011");
}

#[tokio::test]
async fn test_verify_used_link_is_inactive() {
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
    let token = context.api.access_links.verify(&id, pin).await.json_value().await["token"]
        .as_str()
        .unwrap()
        .to_owned();
    let resp = context
        .api_with_token(&token, None)
        .access_links
        .submit(submission())
        .await;
    assert_eq!(resp.status(), 201);

    // WHEN
    let resp = context.api.access_links.verify(&id, pin).await;

    // THEN
    assert_eq!(resp.status(), 409);
    assert_eq!(resp.json_value().await["code"], "BR_0011");
}

#[tokio::test]
async fn test_submit_without_token_is_unauthorized() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api_with_token("", None)
        .access_links
        .submit(submission())
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_submit_with_forged_token_is_forbidden() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api_with_token("forged.token", None)
        .access_links
        .submit(submission())
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert_eq!(resp.json_value().await["code"], "BR_0014");
}

#[tokio::test]
async fn test_empty_submission_is_rejected_and_link_stays_active() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let (id, token) = create_and_verify(&context, setup.advocate_id, &setup.case_id).await;

    // WHEN
    let resp = context
        .api_with_token(&token, None)
        .access_links
        .submit(json!({ "attachments": [] }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0015");

    let link = context
        .api_as(setup.advocate_id)
        .access_links
        .get(&id)
        .await
        .json_value()
        .await;
    assert_eq!(link["status"], "ACTIVE");
}
