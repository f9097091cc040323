use lexdesk_core::service::history::dto::{GetHistoryListQueryDTO, HistoryResponseDTO};
use one_dto_mapper::From;
use serde::{Deserialize, Serialize};
use shared_types::{AdminId, EntityId, HistoryId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, default_page_size, page_size};

#[derive(Clone, Copy, Debug, Serialize, ToSchema, From)]
#[from(lexdesk_core::model::history::HistoryAction)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum HistoryActionRestEnum {
    Created,
    Verified,
    VerificationFailed,
    Consumed,
    Expired,
    Deleted,
    PaymentAdded,
    PaymentUpdated,
    PaymentDeleted,
    Cancelled,
    Reminded,
}

#[derive(Clone, Copy, Debug, Serialize, ToSchema, From)]
#[from(lexdesk_core::model::history::HistoryEntityType)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum HistoryEntityTypeRestEnum {
    Admin,
    Client,
    Case,
    Hearing,
    Comment,
    AccessLink,
    Invoice,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(HistoryResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HistoryResponseRestDTO {
    pub id: HistoryId,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub created_date: OffsetDateTime,
    pub action: HistoryActionRestEnum,
    pub entity_id: EntityId,
    pub entity_type: HistoryEntityTypeRestEnum,
    /// Empty for events caused by counterparties or scheduled tasks
    pub actor_id: Option<AdminId>,
}

pub(crate) type GetHistoryListResponseRestDTO = GetListResponseRestDTO<HistoryResponseRestDTO>;

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetHistoryListQuery {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    pub entity_id: Option<EntityId>,
}

impl From<GetHistoryListQuery> for GetHistoryListQueryDTO {
    fn from(value: GetHistoryListQuery) -> Self {
        Self {
            page: value.page,
            page_size: page_size(value.page_size),
            entity_id: value.entity_id,
        }
    }
}
