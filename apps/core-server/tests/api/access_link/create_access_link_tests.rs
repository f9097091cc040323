use shared_types::AccessLinkId;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_create_access_link_returns_pin_once() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);

    // WHEN
    let resp = api.access_links.create(&setup.case_id, 24).await;

    // THEN
    assert_eq!(resp.status(), 201);
    let created = resp.json_value().await;
    let pin = created["pin"].as_str().unwrap();
    assert_eq!(pin.len(), 6);
    assert!(pin.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(created["status"], "ACTIVE");
    assert_eq!(created["caseId"], setup.case_id.to_string());
    assert_eq!(created["createdBy"], setup.advocate_id.to_string());

    let id: AccessLinkId = created["id"].as_str().unwrap().parse().unwrap();
    let resp = api.access_links.get(&id).await;
    assert_eq!(resp.status(), 200);
    let link = resp.json_value().await;
    assert!(link.get("pin").is_none());
    assert!(link.get("secretHash").is_none());
    assert_eq!(link["title"], "Signed witness statement");

    let list = api
        .cases
        .list_access_links(&setup.case_id)
        .await
        .json_value()
        .await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_access_link_rejects_expiry_out_of_range() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);

    // WHEN
    let zero = api.access_links.create(&setup.case_id, 0).await;
    let too_long = api.access_links.create(&setup.case_id, 721).await;

    // THEN
    assert_eq!(zero.status(), 400);
    assert_eq!(zero.json_value().await["code"], "BR_0021");
    assert_eq!(too_long.status(), 400);
    assert_eq!(too_long.json_value().await["code"], "BR_0021");
}

#[tokio::test]
async fn test_create_access_link_on_foreign_case_is_forbidden() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let other_advocate = context.db.create_advocate("other@lexdesk.test").await;

    // WHEN
    let resp = context
        .api_as(other_advocate)
        .access_links
        .create(&setup.case_id, 24)
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
}
