use serde_json::json;
use shared_types::InvoiceId;
use similar_asserts::assert_eq;

use crate::utils::api_clients::Client;
use crate::utils::context::{CaseSetup, TestContext};

async fn create_invoice(api: &Client, setup: &CaseSetup, amount: &str) -> InvoiceId {
    api.invoices
        .create(&setup.client_id, amount, "2026-12-31")
        .await
        .json_value()
        .await["id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap()
}

#[tokio::test]
async fn test_payments_settle_invoice() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);
    let id = create_invoice(&api, &setup, "1000.00").await;

    // WHEN
    let first = api.invoices.add_payment(&id, "400.00", "cash").await;

    // THEN
    assert_eq!(first.status(), 201);
    let first = first.json_value().await;
    assert_eq!(first["payment"]["mode"], "CASH");
    assert_eq!(first["invoice"]["status"], "PARTIALLY_PAID");
    assert_eq!(first["invoice"]["paid"], "400.00");
    assert_eq!(first["invoice"]["remaining"], "600.00");

    // WHEN
    let second = api.invoices.add_payment(&id, "600.00", "UPI").await;

    // THEN
    assert_eq!(second.status(), 201);
    let second = second.json_value().await;
    assert_eq!(second["invoice"]["status"], "PAID");
    assert_eq!(second["invoice"]["remaining"], "0.00");

    let extra = api.invoices.add_payment(&id, "1.00", "cash").await;
    assert_eq!(extra.status(), 409);
    assert_eq!(extra.json_value().await["code"], "BR_0018");

    let list = api.invoices.list_payments(&id).await.json_value().await;
    assert_eq!(list["payments"].as_array().unwrap().len(), 2);
    assert_eq!(list["summary"]["paid"], "1000.00");
}

#[tokio::test]
async fn test_payment_exceeding_remaining_amount() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);
    let id = create_invoice(&api, &setup, "500.00").await;

    // WHEN
    let resp = api.invoices.add_payment(&id, "500.02", "bank").await;

    // THEN
    assert_eq!(resp.status(), 409);
    assert_eq!(resp.json_value().await["code"], "BR_0017");

    let invoice = api.invoices.get(&id).await.json_value().await;
    assert_eq!(invoice["status"], "UNPAID");
    assert_eq!(invoice["paidAmount"], "0.00");
}

#[tokio::test]
async fn test_payment_within_tolerance_of_remaining_amount() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);
    let id = create_invoice(&api, &setup, "500.00").await;

    // WHEN
    let resp = api.invoices.add_payment(&id, "500.01", "bank").await;

    // THEN
    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;
    assert_eq!(resp["invoice"]["status"], "PAID");
    assert_eq!(resp["invoice"]["paid"], "500.01");
}

#[tokio::test]
async fn test_payment_input_validation() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);
    let id = create_invoice(&api, &setup, "500.00").await;

    // WHEN
    let zero = api.invoices.add_payment(&id, "0", "cash").await;
    let bad_mode = api.invoices.add_payment(&id, "10.00", "barter").await;

    // THEN
    assert_eq!(zero.status(), 400);
    assert_eq!(zero.json_value().await["code"], "BR_0016");
    assert_eq!(bad_mode.status(), 400);
    assert_eq!(bad_mode.json_value().await["code"], "BR_0023");
}

#[tokio::test]
async fn test_delete_payment_recomputes_invoice() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);
    let id = create_invoice(&api, &setup, "1000.00").await;
    let first = api
        .invoices
        .add_payment(&id, "400.00", "cash")
        .await
        .json_value()
        .await;
    let payment_id = first["payment"]["id"].as_str().unwrap().to_owned();
    api.invoices.add_payment(&id, "600.00", "cheque").await;

    // WHEN
    let forbidden = api.invoices.delete_payment(&id, &payment_id).await;
    let resp = context.api.invoices.delete_payment(&id, &payment_id).await;

    // THEN
    assert_eq!(forbidden.status(), 403);
    assert_eq!(resp.status(), 200);
    let invoice = resp.json_value().await;
    assert_eq!(invoice["status"], "PARTIALLY_PAID");
    assert_eq!(invoice["paidAmount"], "600.00");
    assert_eq!(invoice["remainingAmount"], "400.00");
}

#[tokio::test]
async fn test_update_payment_amount() {
    // GIVEN
    let (context, setup) = TestContext::new_with_case().await;
    let api = context.api_as(setup.advocate_id);
    let id = create_invoice(&api, &setup, "1000.00").await;
    let created = api
        .invoices
        .add_payment(&id, "1000.00", "bank")
        .await
        .json_value()
        .await;
    assert_eq!(created["invoice"]["status"], "PAID");
    let payment_id = created["payment"]["id"].as_str().unwrap().to_owned();

    // WHEN
    let forbidden = api
        .invoices
        .update_payment(&id, &payment_id, json!({ "amount": "250.00" }))
        .await;
    let resp = context
        .api
        .invoices
        .update_payment(
            &id,
            &payment_id,
            json!({ "amount": "250.00", "transactionRef": "NEFT-42" }),
        )
        .await;

    // THEN
    assert_eq!(forbidden.status(), 403);
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["payment"]["amount"], "250.00");
    assert_eq!(resp["payment"]["transactionRef"], "NEFT-42");
    assert_eq!(resp["invoice"]["status"], "PARTIALLY_PAID");
    assert_eq!(resp["invoice"]["remaining"], "750.00");
}
