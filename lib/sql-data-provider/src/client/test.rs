use lexdesk_core::model::client::{Client, ClientListQuery};
use lexdesk_core::repository::client_repository::ClientRepository;
use lexdesk_core::repository::error::DataLayerError;
use sea_orm::DatabaseConnection;
use shared_types::{AdminId, ClientId};
use similar_asserts::assert_eq;
use time::Duration;

use super::ClientProvider;
use crate::test_utilities::{
    get_dummy_date, insert_admin_to_database, setup_test_data_layer_and_connection,
};
use crate::transaction_context::TransactionManagerImpl;

struct TestSetup {
    pub db: DatabaseConnection,
    pub provider: ClientProvider,
    pub owner_id: AdminId,
}

async fn setup() -> TestSetup {
    let data_layer = setup_test_data_layer_and_connection().await;
    let db = data_layer.db;

    let owner_id = insert_admin_to_database(&db, "owner@example.com")
        .await
        .unwrap();

    TestSetup {
        provider: ClientProvider {
            db: TransactionManagerImpl::new(db.clone()),
        },
        db,
        owner_id,
    }
}

fn dummy_client(owner_id: AdminId, name: &str) -> Client {
    Client {
        id: ClientId::new_v4(),
        created_date: get_dummy_date(),
        last_modified: get_dummy_date(),
        owner_id,
        name: name.to_owned(),
        email: "client@example.com".to_owned(),
        phone: None,
    }
}

#[tokio::test]
async fn test_create_and_get_client() {
    // given
    let setup = setup().await;
    let client = dummy_client(setup.owner_id, "Vikram Mehta");

    // when
    let id = setup.provider.create_client(client.clone()).await.unwrap();

    // then
    assert_eq!(setup.provider.get_client(&id).await.unwrap(), Some(client));
}

#[tokio::test]
async fn test_create_client_unknown_owner() {
    let setup = setup().await;

    let result = setup
        .provider
        .create_client(dummy_client(AdminId::new_v4(), "Orphan"))
        .await;

    assert!(matches!(result, Err(DataLayerError::IncorrectParameters)));
}

#[tokio::test]
async fn test_get_client_list_filtered_by_owner() {
    // given
    let setup = setup().await;
    let other_owner = insert_admin_to_database(&setup.db, "other@example.com")
        .await
        .unwrap();

    let mut older = dummy_client(setup.owner_id, "Older");
    older.created_date = get_dummy_date() - Duration::days(1);
    setup.provider.create_client(older).await.unwrap();
    setup
        .provider
        .create_client(dummy_client(setup.owner_id, "Newer"))
        .await
        .unwrap();
    setup
        .provider
        .create_client(dummy_client(other_owner, "Foreign"))
        .await
        .unwrap();

    // when
    let result = setup
        .provider
        .get_client_list(ClientListQuery {
            owner_id: Some(setup.owner_id),
            ..Default::default()
        })
        .await
        .unwrap();

    // then
    assert_eq!(result.total_items, 2);
    assert_eq!(result.total_pages, 1);
    let names: Vec<_> = result.values.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Newer", "Older"]);

    let all = setup
        .provider
        .get_client_list(ClientListQuery::default())
        .await
        .unwrap();
    assert_eq!(all.total_items, 3);
}
