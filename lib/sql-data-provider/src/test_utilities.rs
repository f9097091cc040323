use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, Unchanged};
use shared_types::{AccessLinkId, AdminId, CaseId, ClientId, HearingId, InvoiceId};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

use crate::entity::{access_link, admin, client, hearing, invoice, legal_case};
use crate::{DataLayer, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2026-03-02 10:00 UTC)
}

pub fn get_dummy_due_date() -> Date {
    date!(2026 - 03 - 31)
}

pub struct TestingDb {
    pub data_layer: DataLayer,
    pub db: DatabaseConnection,
}

pub async fn setup_test_data_layer_and_connection() -> TestingDb {
    let db = db_conn("sqlite::memory:", true)
        .await
        .expect("in-memory database");

    TestingDb {
        data_layer: DataLayer::build(db.clone()),
        db,
    }
}

pub async fn insert_admin_to_database(
    database: &DatabaseConnection,
    email: &str,
) -> Result<AdminId, DbErr> {
    insert_admin_with_role(database, email, admin::AdminRole::Advocate).await
}

pub async fn insert_super_admin_to_database(
    database: &DatabaseConnection,
    email: &str,
) -> Result<AdminId, DbErr> {
    insert_admin_with_role(database, email, admin::AdminRole::SuperAdmin).await
}

async fn insert_admin_with_role(
    database: &DatabaseConnection,
    email: &str,
    role: admin::AdminRole,
) -> Result<AdminId, DbErr> {
    let model = admin::ActiveModel {
        id: Set(AdminId::new_v4()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        name: Set("Asha Rao".to_owned()),
        email: Set(email.to_owned()),
        phone: Set(None),
        role: Set(role),
        deactivated_at: Set(None),
    }
    .insert(database)
    .await?;

    Ok(model.id)
}

pub async fn insert_client_to_database(
    database: &DatabaseConnection,
    owner_id: AdminId,
) -> Result<ClientId, DbErr> {
    let model = client::ActiveModel {
        id: Set(ClientId::new_v4()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        owner_id: Set(owner_id),
        name: Set("Vikram Mehta".to_owned()),
        email: Set("vikram@example.com".to_owned()),
        phone: Set(Some("+919800000000".to_owned())),
    }
    .insert(database)
    .await?;

    Ok(model.id)
}

pub async fn insert_case_to_database(
    database: &DatabaseConnection,
    owner_id: AdminId,
    client_id: ClientId,
) -> Result<CaseId, DbErr> {
    let model = legal_case::ActiveModel {
        id: Set(CaseId::new_v4()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        owner_id: Set(owner_id),
        client_id: Set(client_id),
        title: Set("Mehta v. State".to_owned()),
        case_number: Set("CS/114/2026".to_owned()),
        description: Set(None),
    }
    .insert(database)
    .await?;

    Ok(model.id)
}

pub async fn insert_hearing_to_database(
    database: &DatabaseConnection,
    case_id: CaseId,
    hearing_date: OffsetDateTime,
) -> Result<HearingId, DbErr> {
    let model = hearing::ActiveModel {
        id: Set(HearingId::new_v4()),
        created_date: Set(get_dummy_date()),
        case_id: Set(case_id),
        hearing_date: Set(hearing_date),
        title: Set("Framing of issues".to_owned()),
        notes: Set(None),
    }
    .insert(database)
    .await?;

    Ok(model.id)
}

pub async fn insert_access_link_to_database(
    database: &DatabaseConnection,
    case_id: CaseId,
    created_by: AdminId,
    status: access_link::AccessLinkStatus,
    expires_at: OffsetDateTime,
    last_modified: OffsetDateTime,
) -> Result<AccessLinkId, DbErr> {
    let model = access_link::ActiveModel {
        id: Set(AccessLinkId::new_v4()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(last_modified),
        case_id: Set(case_id),
        hearing_id: Set(None),
        title: Set("Upload documents".to_owned()),
        description: Set(None),
        status: Set(status),
        secret_hash: Set("$pbkdf2-sha256$i=1000$c2FsdA$aGFzaA".to_owned()),
        expires_at: Set(expires_at),
        created_by: Set(created_by),
        contact_email: Set("witness@example.com".to_owned()),
        contact_phone: Set(None),
    }
    .insert(database)
    .await?;

    Ok(model.id)
}

/// Moves the expiry of a link, e.g. into the past
pub async fn set_access_link_expiry(
    database: &DatabaseConnection,
    id: AccessLinkId,
    expires_at: OffsetDateTime,
) -> Result<(), DbErr> {
    access_link::ActiveModel {
        id: Unchanged(id),
        expires_at: Set(expires_at),
        ..Default::default()
    }
    .update(database)
    .await?;

    Ok(())
}

pub struct InvoiceFixture {
    pub year: i32,
    pub sequence: u32,
    pub amount_minor: i64,
    pub paid_amount_minor: i64,
    pub status: invoice::InvoiceStatus,
    pub due_date: Date,
    pub last_reminder_sent_at: Option<OffsetDateTime>,
}

impl Default for InvoiceFixture {
    fn default() -> Self {
        Self {
            year: 2026,
            sequence: 1,
            amount_minor: 100_000,
            paid_amount_minor: 0,
            status: invoice::InvoiceStatus::Unpaid,
            due_date: get_dummy_due_date(),
            last_reminder_sent_at: None,
        }
    }
}

pub async fn insert_invoice_to_database(
    database: &DatabaseConnection,
    client_id: ClientId,
    owner_id: AdminId,
    fixture: InvoiceFixture,
) -> Result<InvoiceId, DbErr> {
    let model = invoice::ActiveModel {
        id: Set(InvoiceId::new_v4()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        number: Set(format!("INV-{}-{:05}", fixture.year, fixture.sequence)),
        year: Set(fixture.year),
        sequence: Set(fixture.sequence),
        client_id: Set(client_id),
        owner_id: Set(owner_id),
        amount: Set(fixture.amount_minor),
        paid_amount: Set(fixture.paid_amount_minor),
        status: Set(fixture.status),
        due_date: Set(fixture.due_date),
        comments: Set(None),
        last_reminder_sent_at: Set(fixture.last_reminder_sent_at),
        reminder_count: Set(u32::from(fixture.last_reminder_sent_at.is_some())),
    }
    .insert(database)
    .await?;

    Ok(model.id)
}
