use sea_orm::entity::prelude::*;
use shared_types::{CaseId, HearingId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hearing")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: HearingId,
    pub created_date: OffsetDateTime,
    pub case_id: CaseId,
    pub hearing_date: OffsetDateTime,
    pub title: String,
    pub notes: Option<String>,
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
