use shared_types::{AdminId, EntityId, HistoryId};
use time::OffsetDateTime;

use crate::model::history::{History, HistoryAction, HistoryEntityType};
use crate::repository::history_repository::HistoryRepository;

pub(crate) fn history_event(
    entity_id: impl Into<EntityId>,
    entity_type: HistoryEntityType,
    action: HistoryAction,
    actor_id: Option<AdminId>,
) -> History {
    History {
        id: HistoryId::new_v4(),
        created_date: OffsetDateTime::now_utc(),
        action,
        entity_id: entity_id.into(),
        entity_type,
        actor_id,
    }
}

/// Appends an audit entry, failures are only logged
pub(crate) async fn log_history_event(repository: &dyn HistoryRepository, event: History) {
    let (entity_id, action) = (event.entity_id, event.action);

    if let Err(error) = repository.create_history(event).await {
        tracing::warn!(%entity_id, %action, "Failed to create history event: {error}");
    }
}
