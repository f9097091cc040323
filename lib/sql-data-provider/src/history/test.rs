use lexdesk_core::model::common::ListPagination;
use lexdesk_core::model::history::{History, HistoryAction, HistoryEntityType, HistoryListQuery};
use lexdesk_core::repository::history_repository::HistoryRepository;
use shared_types::{AdminId, EntityId, HistoryId};
use similar_asserts::assert_eq;
use time::Duration;
use uuid::Uuid;

use super::HistoryProvider;
use crate::test_utilities::{get_dummy_date, setup_test_data_layer_and_connection};
use crate::transaction_context::TransactionManagerImpl;

async fn setup() -> HistoryProvider {
    let data_layer = setup_test_data_layer_and_connection().await;

    HistoryProvider {
        db: TransactionManagerImpl::new(data_layer.db),
    }
}

fn dummy_history(entity_id: EntityId, action: HistoryAction, minutes: i64) -> History {
    History {
        id: HistoryId::new_v4(),
        created_date: get_dummy_date() + Duration::minutes(minutes),
        action,
        entity_id,
        entity_type: HistoryEntityType::AccessLink,
        actor_id: Some(AdminId::new_v4()),
    }
}

#[tokio::test]
async fn test_history_list_newest_first_for_entity() {
    // given
    let provider = setup().await;
    let link: EntityId = Uuid::new_v4().into();
    let other: EntityId = Uuid::new_v4().into();

    let created = dummy_history(link, HistoryAction::Created, 0);
    let consumed = dummy_history(link, HistoryAction::Consumed, 5);
    provider.create_history(created.clone()).await.unwrap();
    provider.create_history(consumed.clone()).await.unwrap();
    provider
        .create_history(dummy_history(other, HistoryAction::Created, 1))
        .await
        .unwrap();

    // when
    let result = provider
        .get_history_list(HistoryListQuery {
            pagination: ListPagination {
                page: 0,
                page_size: 10,
            },
            entity_id: Some(link),
        })
        .await
        .unwrap();

    // then
    assert_eq!(result.total_items, 2);
    assert_eq!(result.values, vec![consumed, created]);

    let everything = provider
        .get_history_list(HistoryListQuery::default())
        .await
        .unwrap();
    assert_eq!(everything.total_items, 3);
}
