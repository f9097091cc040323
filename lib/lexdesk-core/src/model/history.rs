use shared_types::{AdminId, EntityId, HistoryId};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use super::common::{GetListResponse, ListPagination};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct History {
    pub id: HistoryId,
    pub created_date: OffsetDateTime,
    pub action: HistoryAction,
    pub entity_id: EntityId,
    pub entity_type: HistoryEntityType,
    pub actor_id: Option<AdminId>,
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryAction {
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

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryEntityType {
    Admin,
    Client,
    Case,
    Hearing,
    Comment,
    AccessLink,
    Invoice,
}

#[derive(Clone, Debug, Default)]
pub struct HistoryListQuery {
    pub pagination: ListPagination,
    pub entity_id: Option<EntityId>,
}

pub type GetHistoryList = GetListResponse<History>;
