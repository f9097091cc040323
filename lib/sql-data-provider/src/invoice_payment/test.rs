use std::str::FromStr;

use lexdesk_core::model::invoice_payment::{
    InvoicePayment, PaymentMode, UpdateInvoicePaymentRequest,
};
use lexdesk_core::repository::error::DataLayerError;
use lexdesk_core::repository::invoice_payment_repository::InvoicePaymentRepository;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use shared_types::{AdminId, InvoiceId, InvoicePaymentId};
use similar_asserts::assert_eq;
use time::Duration;

use super::InvoicePaymentProvider;
use crate::test_utilities::{
    InvoiceFixture, get_dummy_date, insert_admin_to_database, insert_client_to_database,
    insert_invoice_to_database, setup_test_data_layer_and_connection,
};
use crate::transaction_context::TransactionManagerImpl;

struct TestSetup {
    #[allow(unused)]
    pub db: DatabaseConnection,
    pub provider: InvoicePaymentProvider,
    pub admin_id: AdminId,
    pub invoice_id: InvoiceId,
}

async fn setup() -> TestSetup {
    let data_layer = setup_test_data_layer_and_connection().await;
    let db = data_layer.db;

    let admin_id = insert_admin_to_database(&db, "owner@example.com")
        .await
        .unwrap();
    let client_id = insert_client_to_database(&db, admin_id).await.unwrap();
    let invoice_id =
        insert_invoice_to_database(&db, client_id, admin_id, InvoiceFixture::default())
            .await
            .unwrap();

    TestSetup {
        provider: InvoicePaymentProvider {
            db: TransactionManagerImpl::new(db.clone()),
        },
        db,
        admin_id,
        invoice_id,
    }
}

fn dummy_payment(setup: &TestSetup, amount: &str, days: i64) -> InvoicePayment {
    InvoicePayment {
        id: InvoicePaymentId::new_v4(),
        created_date: get_dummy_date(),
        last_modified: get_dummy_date(),
        invoice_id: setup.invoice_id,
        amount: Decimal::from_str(amount).unwrap(),
        mode: PaymentMode::Upi,
        transaction_ref: Some("UPI-77812".to_owned()),
        comment: None,
        payment_date: get_dummy_date() + Duration::days(days),
        recorded_by: setup.admin_id,
    }
}

#[tokio::test]
async fn test_create_list_and_count_payments() {
    // given
    let setup = setup().await;
    let later = dummy_payment(&setup, "300.00", 5);
    let earlier = dummy_payment(&setup, "50.50", 1);

    // when
    setup.provider.create_payment(later.clone()).await.unwrap();
    setup.provider.create_payment(earlier.clone()).await.unwrap();

    // then
    assert_eq!(
        setup.provider.get_payment_list(&setup.invoice_id).await.unwrap(),
        vec![earlier.clone(), later]
    );
    assert_eq!(setup.provider.count_payments(&setup.invoice_id).await.unwrap(), 2);
    assert_eq!(
        setup.provider.get_payment(&earlier.id).await.unwrap(),
        Some(earlier)
    );
}

#[tokio::test]
async fn test_create_payment_for_missing_invoice() {
    let setup = setup().await;
    let mut payment = dummy_payment(&setup, "10", 0);
    payment.invoice_id = InvoiceId::new_v4();

    let result = setup.provider.create_payment(payment).await;

    assert!(matches!(result, Err(DataLayerError::IncorrectParameters)));
}

#[tokio::test]
async fn test_update_payment() {
    // given
    let setup = setup().await;
    let payment = dummy_payment(&setup, "300.00", 1);
    setup.provider.create_payment(payment.clone()).await.unwrap();

    // when
    setup
        .provider
        .update_payment(UpdateInvoicePaymentRequest {
            id: payment.id,
            amount: Some(Decimal::from_str("275.25").unwrap()),
            mode: Some(PaymentMode::Cheque),
            transaction_ref: Some(None),
            comment: Some(Some("Cheque no. 000123".to_owned())),
            payment_date: None,
        })
        .await
        .unwrap();

    // then
    let updated = setup.provider.get_payment(&payment.id).await.unwrap().unwrap();
    assert_eq!(updated.amount, Decimal::from_str("275.25").unwrap());
    assert_eq!(updated.mode, PaymentMode::Cheque);
    assert_eq!(updated.transaction_ref, None);
    assert_eq!(updated.comment.as_deref(), Some("Cheque no. 000123"));
    assert_eq!(updated.payment_date, payment.payment_date);
}

#[tokio::test]
async fn test_delete_payment() {
    // given
    let setup = setup().await;
    let payment = dummy_payment(&setup, "300.00", 1);
    setup.provider.create_payment(payment.clone()).await.unwrap();

    // when
    setup.provider.delete_payment(&payment.id).await.unwrap();

    // then
    assert_eq!(setup.provider.count_payments(&setup.invoice_id).await.unwrap(), 0);
    assert!(matches!(
        setup.provider.delete_payment(&payment.id).await,
        Err(DataLayerError::RecordNotUpdated)
    ));
}
