use std::str::FromStr;
use std::sync::Arc;

use lexdesk_core::model::common::LockType;
use lexdesk_core::model::invoice::{
    Invoice, InvoiceListQuery, InvoiceRelations, InvoiceStatus, ReminderBookkeeping,
    ReminderQuery, UpdateInvoiceRequest,
};
use lexdesk_core::proto::transaction_manager::TransactionManager;
use lexdesk_core::repository::error::DataLayerError;
use lexdesk_core::repository::invoice_repository::InvoiceRepository;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait};
use shared_types::{AdminId, ClientId, InvoiceId};
use similar_asserts::assert_eq;
use time::Duration;
use time::macros::date;

use super::InvoiceProvider;
use crate::entity::invoice;
use crate::test_utilities::{
    InvoiceFixture, get_dummy_date, get_dummy_due_date, insert_admin_to_database,
    insert_client_to_database, insert_invoice_to_database, setup_test_data_layer_and_connection,
};
use crate::transaction_context::TransactionManagerImpl;

struct TestSetup {
    pub db: DatabaseConnection,
    pub provider: InvoiceProvider,
    pub owner_id: AdminId,
    pub client_id: ClientId,
}

async fn setup() -> TestSetup {
    let data_layer = setup_test_data_layer_and_connection().await;
    let db = data_layer.db;

    let owner_id = insert_admin_to_database(&db, "owner@example.com")
        .await
        .unwrap();
    let client_id = insert_client_to_database(&db, owner_id).await.unwrap();

    TestSetup {
        provider: InvoiceProvider {
            db: TransactionManagerImpl::new(db.clone()),
        },
        db,
        owner_id,
        client_id,
    }
}

fn dummy_invoice(setup: &TestSetup, sequence: u32) -> Invoice {
    Invoice {
        id: InvoiceId::new_v4(),
        created_date: get_dummy_date(),
        last_modified: get_dummy_date(),
        number: format!("INV-2026-{sequence:05}"),
        year: 2026,
        sequence,
        client_id: setup.client_id,
        owner_id: setup.owner_id,
        amount: Decimal::from_str("15000.50").unwrap(),
        paid_amount: Decimal::ZERO,
        status: InvoiceStatus::Unpaid,
        due_date: get_dummy_due_date(),
        comments: Some("Retainer for March".to_owned()),
        last_reminder_sent_at: None,
        reminder_count: 0,
        client: None,
    }
}

#[tokio::test]
async fn test_create_and_get_invoice_with_client() {
    // given
    let setup = setup().await;
    let invoice = dummy_invoice(&setup, 7);

    // when
    let id = setup.provider.create_invoice(invoice.clone()).await.unwrap();

    // then
    let stored = setup
        .provider
        .get_invoice(&id, &InvoiceRelations::default(), None)
        .await
        .unwrap();
    assert_eq!(stored, Some(invoice));

    let with_client = setup
        .provider
        .get_invoice(
            &id,
            &InvoiceRelations { client: true },
            Some(LockType::Update),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(with_client.client.unwrap().id, setup.client_id);
}

#[tokio::test]
async fn test_create_invoice_sequence_collision() {
    // given
    let setup = setup().await;
    setup
        .provider
        .create_invoice(dummy_invoice(&setup, 3))
        .await
        .unwrap();

    // when
    let result = setup.provider.create_invoice(dummy_invoice(&setup, 3)).await;

    // then
    assert!(matches!(result, Err(DataLayerError::AlreadyExists)));
}

#[tokio::test]
async fn test_get_max_sequence_per_year() {
    // given
    let setup = setup().await;
    for (year, sequence) in [(2025, 40), (2026, 1), (2026, 2)] {
        insert_invoice_to_database(
            &setup.db,
            setup.client_id,
            setup.owner_id,
            InvoiceFixture {
                year,
                sequence,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    }

    // then
    assert_eq!(setup.provider.get_max_sequence(2026).await.unwrap(), Some(2));
    assert_eq!(setup.provider.get_max_sequence(2025).await.unwrap(), Some(40));
    assert_eq!(setup.provider.get_max_sequence(2027).await.unwrap(), None);
}

#[tokio::test]
async fn test_update_invoice_ledger_and_reminder() {
    // given
    let setup = setup().await;
    let id = insert_invoice_to_database(
        &setup.db,
        setup.client_id,
        setup.owner_id,
        InvoiceFixture::default(),
    )
    .await
    .unwrap();
    let reminded_at = get_dummy_date() + Duration::days(40);

    // when
    setup
        .provider
        .update_invoice(UpdateInvoiceRequest {
            id,
            last_modified: reminded_at,
            paid_amount: Some(Decimal::from_str("250.75").unwrap()),
            status: Some(InvoiceStatus::PartiallyPaid),
            reminder: Some(ReminderBookkeeping {
                last_reminder_sent_at: reminded_at,
                reminder_count: 1,
            }),
        })
        .await
        .unwrap();

    // then
    let model = invoice::Entity::find_by_id(id)
        .one(&setup.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(model.paid_amount, 25075);
    assert_eq!(model.amount, 100_000);
    assert_eq!(model.status, invoice::InvoiceStatus::PartiallyPaid);
    assert_eq!(model.last_reminder_sent_at, Some(reminded_at));
    assert_eq!(model.reminder_count, 1);
    assert_eq!(model.last_modified, reminded_at);
}

#[tokio::test]
async fn test_locked_read_modify_write_keeps_both_payments() {
    // given
    let setup = setup().await;
    let id = insert_invoice_to_database(
        &setup.db,
        setup.client_id,
        setup.owner_id,
        InvoiceFixture::default(),
    )
    .await
    .unwrap();
    let transaction_manager: Arc<dyn TransactionManager> =
        Arc::new(TransactionManagerImpl::new(setup.db.clone()));
    let provider = &setup.provider;

    let add_payment = |amount: &'static str| {
        let transaction_manager = transaction_manager.clone();
        async move {
            transaction_manager
                .tx(async move {
                    let invoice = provider
                        .get_invoice(&id, &InvoiceRelations::default(), Some(LockType::Update))
                        .await?
                        .ok_or(DataLayerError::RecordNotUpdated)?;

                    provider
                        .update_invoice(UpdateInvoiceRequest {
                            id,
                            last_modified: get_dummy_date(),
                            paid_amount: Some(
                                invoice.paid_amount + Decimal::from_str(amount).unwrap(),
                            ),
                            status: Some(InvoiceStatus::PartiallyPaid),
                            reminder: None,
                        })
                        .await
                })
                .await
                .unwrap()
                .unwrap()
        }
    };

    // when
    tokio::join!(add_payment("100.00"), add_payment("50.25"));

    // then
    let model = invoice::Entity::find_by_id(id)
        .one(&setup.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(model.paid_amount, 15025);
}

#[tokio::test]
async fn test_update_missing_invoice() {
    let setup = setup().await;

    let result = setup
        .provider
        .update_invoice(UpdateInvoiceRequest {
            id: InvoiceId::new_v4(),
            last_modified: get_dummy_date(),
            paid_amount: None,
            status: Some(InvoiceStatus::Cancelled),
            reminder: None,
        })
        .await;

    assert!(matches!(result, Err(DataLayerError::RecordNotUpdated)));
}

#[tokio::test]
async fn test_get_invoice_list_filtered_by_status() {
    // given
    let setup = setup().await;
    for (sequence, status) in [
        (1, invoice::InvoiceStatus::Paid),
        (2, invoice::InvoiceStatus::Unpaid),
        (3, invoice::InvoiceStatus::Unpaid),
    ] {
        insert_invoice_to_database(
            &setup.db,
            setup.client_id,
            setup.owner_id,
            InvoiceFixture {
                sequence,
                status,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    }

    // when
    let result = setup
        .provider
        .get_invoice_list(InvoiceListQuery {
            owner_id: Some(setup.owner_id),
            status: Some(InvoiceStatus::Unpaid),
            ..Default::default()
        })
        .await
        .unwrap();

    // then
    assert_eq!(result.total_items, 2);
    let numbers: Vec<_> = result.values.iter().map(|i| i.number.as_str()).collect();
    assert_eq!(numbers, vec!["INV-2026-00003", "INV-2026-00002"]);
}

#[tokio::test]
async fn test_get_invoices_for_reminder() {
    // given
    let setup = setup().await;
    let now = get_dummy_date() + Duration::days(60);

    let overdue = insert_invoice_to_database(
        &setup.db,
        setup.client_id,
        setup.owner_id,
        InvoiceFixture {
            sequence: 1,
            due_date: date!(2026 - 03 - 01),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let reminded_long_ago = insert_invoice_to_database(
        &setup.db,
        setup.client_id,
        setup.owner_id,
        InvoiceFixture {
            sequence: 2,
            status: invoice::InvoiceStatus::PartiallyPaid,
            paid_amount_minor: 10_000,
            due_date: date!(2026 - 03 - 05),
            last_reminder_sent_at: Some(now - Duration::days(10)),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    // reminded yesterday
    insert_invoice_to_database(
        &setup.db,
        setup.client_id,
        setup.owner_id,
        InvoiceFixture {
            sequence: 3,
            due_date: date!(2026 - 03 - 02),
            last_reminder_sent_at: Some(now - Duration::days(1)),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    // settled
    insert_invoice_to_database(
        &setup.db,
        setup.client_id,
        setup.owner_id,
        InvoiceFixture {
            sequence: 4,
            status: invoice::InvoiceStatus::Paid,
            paid_amount_minor: 100_000,
            due_date: date!(2026 - 03 - 01),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    // not yet due
    insert_invoice_to_database(
        &setup.db,
        setup.client_id,
        setup.owner_id,
        InvoiceFixture {
            sequence: 5,
            due_date: date!(2026 - 12 - 31),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // when
    let invoices = setup
        .provider
        .get_invoices_for_reminder(ReminderQuery {
            due_before: now.date(),
            last_reminded_before: now - Duration::days(7),
            limit: 50,
        })
        .await
        .unwrap();

    // then
    let ids: Vec<_> = invoices.iter().map(|invoice| invoice.id).collect();
    assert_eq!(ids, vec![overdue, reminded_long_ago]);
    assert!(
        invoices
            .iter()
            .all(|invoice| invoice.client.as_ref().map(|c| c.id) == Some(setup.client_id))
    );
    assert_eq!(invoices[1].paid_amount, Decimal::from_str("100.00").unwrap());
}

#[tokio::test]
async fn test_delete_invoice() {
    // given
    let setup = setup().await;
    let id = insert_invoice_to_database(
        &setup.db,
        setup.client_id,
        setup.owner_id,
        InvoiceFixture::default(),
    )
    .await
    .unwrap();

    // when
    setup.provider.delete_invoice(&id).await.unwrap();

    // then
    assert!(
        invoice::Entity::find_by_id(id)
            .one(&setup.db)
            .await
            .unwrap()
            .is_none()
    );
    assert!(matches!(
        setup.provider.delete_invoice(&id).await,
        Err(DataLayerError::RecordNotUpdated)
    ));
}
