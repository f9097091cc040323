use one_dto_mapper::From;
use shared_types::{AdminId, EntityId, HistoryId};
use time::OffsetDateTime;

use crate::model::common::GetListResponse;
use crate::model::history::{History, HistoryAction, HistoryEntityType};

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(History)]
pub struct HistoryResponseDTO {
    pub id: HistoryId,
    pub created_date: OffsetDateTime,
    pub action: HistoryAction,
    pub entity_id: EntityId,
    pub entity_type: HistoryEntityType,
    pub actor_id: Option<AdminId>,
}

#[derive(Clone, Debug, Default)]
pub struct GetHistoryListQueryDTO {
    pub page: u32,
    pub page_size: u32,
    pub entity_id: Option<EntityId>,
}

pub type GetHistoryListResponseDTO = GetListResponse<HistoryResponseDTO>;
