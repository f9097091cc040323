use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{AdminId, InvoiceId, InvoicePaymentId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invoice_payment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: InvoicePaymentId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub invoice_id: InvoiceId,
    /// Minor units
    pub amount: i64,
    pub mode: PaymentMode,
    pub transaction_ref: Option<String>,
    pub comment: Option<String>,
    pub payment_date: OffsetDateTime,
    pub recorded_by: AdminId,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::invoice::Entity",
        from = "Column::InvoiceId",
        to = "super::invoice::Column::Id",
        on_update = "Restrict",
        on_delete = "Cascade"
    )]
    Invoice,
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(lexdesk_core::model::invoice_payment::PaymentMode)]
#[into(lexdesk_core::model::invoice_payment::PaymentMode)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PaymentMode {
    #[sea_orm(string_value = "cash")]
    Cash,
    #[sea_orm(string_value = "upi")]
    Upi,
    #[sea_orm(string_value = "bank")]
    Bank,
    #[sea_orm(string_value = "cheque")]
    Cheque,
    #[sea_orm(string_value = "others")]
    Others,
}
