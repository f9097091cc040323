use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{AdminId, ClientId, InvoiceId};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invoice")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: InvoiceId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub number: String,
    pub year: i32,
    pub sequence: u32,
    pub client_id: ClientId,
    pub owner_id: AdminId,
    /// Minor units
    pub amount: i64,
    /// Minor units
    pub paid_amount: i64,
    pub status: InvoiceStatus,
    pub due_date: Date,
    pub comments: Option<String>,
    pub last_reminder_sent_at: Option<OffsetDateTime>,
    pub reminder_count: u32,
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
    #[sea_orm(has_many = "super::invoice_payment::Entity")]
    InvoicePayment,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::invoice_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvoicePayment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(lexdesk_core::model::invoice::InvoiceStatus)]
#[into(lexdesk_core::model::invoice::InvoiceStatus)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum InvoiceStatus {
    #[sea_orm(string_value = "UNPAID")]
    Unpaid,
    #[sea_orm(string_value = "PARTIALLY_PAID")]
    PartiallyPaid,
    #[sea_orm(string_value = "PAID")]
    Paid,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}
