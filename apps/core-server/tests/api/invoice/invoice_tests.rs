use shared_types::InvoiceId;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_create_invoice_assigns_number() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);

    // WHEN
    let first = api
        .invoices
        .create(&setup.client_id, "1500.00", "2026-12-31")
        .await;
    let second = api
        .invoices
        .create(&setup.client_id, "250.00", "2026-12-31")
        .await;

    // THEN
    assert_eq!(first.status(), 201);
    assert_eq!(second.status(), 201);
    let first: InvoiceId = first.json_value().await["id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    let second: InvoiceId = second.json_value().await["id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    let first = api.invoices.get(&first).await.json_value().await;
    let second = api.invoices.get(&second).await.json_value().await;
    let first_number = first["number"].as_str().unwrap();
    let second_number = second["number"].as_str().unwrap();
    assert!(first_number.starts_with("INV-"));
    assert!(first_number.ends_with("-00001"));
    assert!(second_number.ends_with("-00002"));
    assert_eq!(first["status"], "UNPAID");
    assert_eq!(first["amount"], "1500.00");
    assert_eq!(first["paidAmount"], "0.00");
    assert_eq!(first["remainingAmount"], "1500.00");
    assert_eq!(first["dueDate"], "2026-12-31");
    assert_eq!(first["ownerId"], setup.advocate_id.to_string());
}

#[tokio::test]
async fn test_create_invoice_for_unknown_client() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .invoices
        .create(&shared_types::ClientId::new_v4(), "100.00", "2026-12-31")
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0002");
}

#[tokio::test]
async fn test_cancel_invoice() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);
    let id: InvoiceId = api
        .invoices
        .create(&setup.client_id, "800.00", "2026-12-31")
        .await
        .json_value()
        .await["id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    // WHEN
    let resp = api.invoices.cancel(&id).await;

    // THEN
    assert_eq!(resp.status(), 204);
    let invoice = api.invoices.get(&id).await.json_value().await;
    assert_eq!(invoice["status"], "CANCELLED");

    let payment = api.invoices.add_payment(&id, "100.00", "cash").await;
    assert_eq!(payment.status(), 409);
}

#[tokio::test]
async fn test_delete_invoice_without_payments() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);
    let id: InvoiceId = api
        .invoices
        .create(&setup.client_id, "300.00", "2026-12-31")
        .await
        .json_value()
        .await["id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    // WHEN
    let resp = api.invoices.delete(&id).await;

    // THEN
    assert_eq!(resp.status(), 204);
    let resp = api.invoices.get(&id).await;
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0006");
}

#[tokio::test]
async fn test_delete_invoice_with_payments_fails() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);
    let id: InvoiceId = api
        .invoices
        .create(&setup.client_id, "300.00", "2026-12-31")
        .await
        .json_value()
        .await["id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(api.invoices.add_payment(&id, "100.00", "bank").await.status(), 201);

    // WHEN
    let resp = api.invoices.delete(&id).await;

    // THEN
    assert_eq!(resp.status(), 409);
    assert_eq!(resp.json_value().await["code"], "BR_0020");
}

#[tokio::test]
async fn test_list_invoices_filtered_by_status() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);
    let mut ids = vec![];
    for amount in ["100.00", "200.00", "300.00"] {
        let id: InvoiceId = api
            .invoices
            .create(&setup.client_id, amount, "2026-12-31")
            .await
            .json_value()
            .await["id"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        ids.push(id);
    }
    assert_eq!(api.invoices.cancel(&ids[0]).await.status(), 204);

    // WHEN
    let unpaid = api
        .invoices
        .list("page=0&pageSize=10&status=UNPAID")
        .await
        .json_value()
        .await;
    let cancelled = api
        .invoices
        .list("page=0&pageSize=10&status=CANCELLED")
        .await
        .json_value()
        .await;

    // THEN
    assert_eq!(unpaid["totalItems"], 2);
    assert_eq!(cancelled["totalItems"], 1);
    assert_eq!(cancelled["values"][0]["id"], ids[0].to_string());
}

#[tokio::test]
async fn test_foreign_invoice_is_forbidden() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let id: InvoiceId = context
        .api_as(setup.advocate_id)
        .invoices
        .create(&setup.client_id, "100.00", "2026-12-31")
        .await
        .json_value()
        .await["id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    let other_advocate = context.db.create_advocate("other@lexdesk.test").await;

    // WHEN
    let resp = context.api_as(other_advocate).invoices.get(&id).await;

    // THEN
    assert_eq!(resp.status(), 403);
}
