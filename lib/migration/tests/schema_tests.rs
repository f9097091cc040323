#![allow(clippy::unwrap_used)]

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use similar_asserts::assert_eq;

async fn migrated_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.execute_unprepared("PRAGMA foreign_keys = ON;")
        .await
        .unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

async fn pragma_names(db: &DatabaseConnection, pragma: &str) -> Vec<String> {
    let rows = db
        .query_all(Statement::from_string(DbBackend::Sqlite, pragma.to_owned()))
        .await
        .unwrap();
    rows.iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect()
}

async fn table_names(db: &DatabaseConnection) -> Vec<String> {
    let mut tables = pragma_names(
        db,
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != 'seaql_migrations'",
    )
    .await;
    tables.sort();
    tables
}

#[tokio::test]
async fn test_db_schema_tables() {
    let db = migrated_db().await;

    assert_eq!(
        table_names(&db).await,
        vec![
            "access_link",
            "admin",
            "attachment",
            "client",
            "comment",
            "hearing",
            "history",
            "invoice",
            "invoice_payment",
            "legal_case",
        ]
    );
}

#[tokio::test]
async fn test_db_schema_access_link() {
    let db = migrated_db().await;

    assert_eq!(
        pragma_names(&db, "PRAGMA table_info(access_link)").await,
        vec![
            "id",
            "created_date",
            "last_modified",
            "case_id",
            "hearing_id",
            "title",
            "description",
            "status",
            "secret_hash",
            "expires_at",
            "created_by",
            "contact_email",
            "contact_phone",
        ]
    );

    let indexes = pragma_names(&db, "PRAGMA index_list(access_link)").await;
    assert!(indexes.contains(&"index-AccessLink-Status-ExpiresAt".to_owned()));
    assert!(indexes.contains(&"index-AccessLink-CaseId".to_owned()));
}

#[tokio::test]
async fn test_db_schema_invoice() {
    let db = migrated_db().await;

    assert_eq!(
        pragma_names(&db, "PRAGMA table_info(invoice)").await,
        vec![
            "id",
            "created_date",
            "last_modified",
            "number",
            "year",
            "sequence",
            "client_id",
            "owner_id",
            "amount",
            "paid_amount",
            "status",
            "due_date",
            "comments",
            "last_reminder_sent_at",
            "reminder_count",
        ]
    );

    let indexes = pragma_names(&db, "PRAGMA index_list(invoice)").await;
    assert!(indexes.contains(&"index-Invoice-Number-Unique".to_owned()));
    assert!(indexes.contains(&"index-Invoice-Year-Sequence-Unique".to_owned()));
    assert!(indexes.contains(&"index-Invoice-Status-DueDate".to_owned()));
}

#[tokio::test]
async fn test_db_schema_comment_link_author_has_no_foreign_key() {
    let db = migrated_db().await;

    let rows = db
        .query_all(Statement::from_string(
            DbBackend::Sqlite,
            "PRAGMA foreign_key_list(comment)".to_owned(),
        ))
        .await
        .unwrap();
    let mut columns: Vec<String> = rows
        .iter()
        .map(|row| row.try_get::<String>("", "from").unwrap())
        .collect();
    columns.sort();

    assert_eq!(columns, vec!["author_admin_id", "case_id", "hearing_id"]);
}

#[tokio::test]
async fn test_db_schema_down_drops_everything() {
    let db = migrated_db().await;

    Migrator::down(&db, None).await.unwrap();

    assert!(table_names(&db).await.is_empty());
}
