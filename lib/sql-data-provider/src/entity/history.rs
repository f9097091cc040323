use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{AdminId, EntityId, HistoryId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "history")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: HistoryId,
    pub created_date: OffsetDateTime,
    pub action: HistoryAction,
    pub entity_id: EntityId,
    pub entity_type: HistoryEntityType,
    pub actor_id: Option<AdminId>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(lexdesk_core::model::history::HistoryAction)]
#[into(lexdesk_core::model::history::HistoryAction)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum HistoryAction {
    #[sea_orm(string_value = "CREATED")]
    Created,
    #[sea_orm(string_value = "VERIFIED")]
    Verified,
    #[sea_orm(string_value = "VERIFICATION_FAILED")]
    VerificationFailed,
    #[sea_orm(string_value = "CONSUMED")]
    Consumed,
    #[sea_orm(string_value = "EXPIRED")]
    Expired,
    #[sea_orm(string_value = "DELETED")]
    Deleted,
    #[sea_orm(string_value = "PAYMENT_ADDED")]
    PaymentAdded,
    #[sea_orm(string_value = "PAYMENT_UPDATED")]
    PaymentUpdated,
    #[sea_orm(string_value = "PAYMENT_DELETED")]
    PaymentDeleted,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
    #[sea_orm(string_value = "REMINDED")]
    Reminded,
}

#[derive(Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(lexdesk_core::model::history::HistoryEntityType)]
#[into(lexdesk_core::model::history::HistoryEntityType)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum HistoryEntityType {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "CLIENT")]
    Client,
    #[sea_orm(string_value = "CASE")]
    Case,
    #[sea_orm(string_value = "HEARING")]
    Hearing,
    #[sea_orm(string_value = "COMMENT")]
    Comment,
    #[sea_orm(string_value = "ACCESS_LINK")]
    AccessLink,
    #[sea_orm(string_value = "INVOICE")]
    Invoice,
}
