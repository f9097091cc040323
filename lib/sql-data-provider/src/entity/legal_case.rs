use sea_orm::entity::prelude::*;
use shared_types::{AdminId, CaseId, ClientId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "legal_case")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: CaseId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub owner_id: AdminId,
    pub client_id: ClientId,
    pub title: String,
    pub case_number: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Client,
    #[sea_orm(has_many = "super::hearing::Entity")]
    Hearing,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::hearing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hearing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
