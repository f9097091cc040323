use sea_orm::entity::prelude::*;
use shared_types::{AdminId, ClientId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ClientId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub owner_id: AdminId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::admin::Entity",
        from = "Column::OwnerId",
        to = "super::admin::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Admin,
    #[sea_orm(has_many = "super::invoice::Entity")]
    Invoice,
}

impl Related<super::admin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admin.def()
    }
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
