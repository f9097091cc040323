use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{AccessLinkId, AdminId, CaseId, HearingId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "access_link")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: AccessLinkId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub case_id: CaseId,
    pub hearing_id: Option<HearingId>,
    pub title: String,
    pub description: Option<String>,
    pub status: AccessLinkStatus,
    pub secret_hash: String,
    pub expires_at: OffsetDateTime,
    pub created_by: AdminId,
    pub contact_email: String,
    pub contact_phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::legal_case::Entity",
        from = "Column::CaseId",
        to = "super::legal_case::Column::Id",
        on_update = "Restrict",
        on_delete = "Cascade"
    )]
    LegalCase,
}

impl Related<super::legal_case::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LegalCase.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(lexdesk_core::model::access_link::AccessLinkStatus)]
#[into(lexdesk_core::model::access_link::AccessLinkStatus)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AccessLinkStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "EXPIRED")]
    Expired,
    #[sea_orm(string_value = "USED")]
    Used,
}
