use sea_orm_migration::prelude::*;

use crate::datatype::{minor_units, timestamp, timestamp_null, uuid_char};
use crate::m20260301_000001_initial::{Admin, Client};

#[derive(DeriveMigrationName)]
pub struct Migration;

const UNIQUE_INVOICE_NUMBER_INDEX: &str = "index-Invoice-Number-Unique";
const UNIQUE_INVOICE_YEAR_SEQUENCE_INDEX: &str = "index-Invoice-Year-Sequence-Unique";
const INVOICE_STATUS_DUE_DATE_INDEX: &str = "index-Invoice-Status-DueDate";
const INVOICE_CLIENT_INDEX: &str = "index-Invoice-ClientId";
const INVOICE_PAYMENT_INVOICE_INDEX: &str = "index-InvoicePayment-InvoiceId";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(uuid_char(Invoice::Id).primary_key())
                    .col(timestamp(Invoice::CreatedDate, manager))
                    .col(timestamp(Invoice::LastModified, manager))
                    .col(ColumnDef::new(Invoice::Number).string().not_null())
                    .col(ColumnDef::new(Invoice::Year).integer().not_null())
                    .col(ColumnDef::new(Invoice::Sequence).unsigned().not_null())
                    .col(uuid_char(Invoice::ClientId))
                    .col(uuid_char(Invoice::OwnerId))
                    .col(minor_units(Invoice::Amount))
                    .col(minor_units(Invoice::PaidAmount).default(0))
                    .col(ColumnDef::new(Invoice::Status).string().not_null())
                    .col(ColumnDef::new(Invoice::DueDate).date().not_null())
                    .col(ColumnDef::new(Invoice::Comments).text().null())
                    .col(timestamp_null(Invoice::LastReminderSentAt, manager))
                    .col(
                        ColumnDef::new(Invoice::ReminderCount)
                            .unsigned()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Invoice-ClientId")
                            .from_tbl(Invoice::Table)
                            .from_col(Invoice::ClientId)
                            .to_tbl(Client::Table)
                            .to_col(Client::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Invoice-OwnerId")
                            .from_tbl(Invoice::Table)
                            .from_col(Invoice::OwnerId)
                            .to_tbl(Admin::Table)
                            .to_col(Admin::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_INVOICE_NUMBER_INDEX)
                    .table(Invoice::Table)
                    .col(Invoice::Number)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_INVOICE_YEAR_SEQUENCE_INDEX)
                    .table(Invoice::Table)
                    .col(Invoice::Year)
                    .col(Invoice::Sequence)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(INVOICE_STATUS_DUE_DATE_INDEX)
                    .table(Invoice::Table)
                    .col(Invoice::Status)
                    .col(Invoice::DueDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(INVOICE_CLIENT_INDEX)
                    .table(Invoice::Table)
                    .col(Invoice::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InvoicePayment::Table)
                    .if_not_exists()
                    .col(uuid_char(InvoicePayment::Id).primary_key())
                    .col(timestamp(InvoicePayment::CreatedDate, manager))
                    .col(timestamp(InvoicePayment::LastModified, manager))
                    .col(uuid_char(InvoicePayment::InvoiceId))
                    .col(minor_units(InvoicePayment::Amount))
                    .col(ColumnDef::new(InvoicePayment::Mode).string().not_null())
                    .col(
                        ColumnDef::new(InvoicePayment::TransactionRef)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(InvoicePayment::Comment).text().null())
                    .col(timestamp(InvoicePayment::PaymentDate, manager))
                    .col(uuid_char(InvoicePayment::RecordedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-InvoicePayment-InvoiceId")
                            .from_tbl(InvoicePayment::Table)
                            .from_col(InvoicePayment::InvoiceId)
                            .to_tbl(Invoice::Table)
                            .to_col(Invoice::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-InvoicePayment-RecordedBy")
                            .from_tbl(InvoicePayment::Table)
                            .from_col(InvoicePayment::RecordedBy)
                            .to_tbl(Admin::Table)
                            .to_col(Admin::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(INVOICE_PAYMENT_INVOICE_INDEX)
                    .table(InvoicePayment::Table)
                    .col(InvoicePayment::InvoiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InvoicePayment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Invoice {
    Table,
    Id,
    CreatedDate,
    LastModified,
    Number,
    Year,
    Sequence,
    ClientId,
    OwnerId,
    Amount,
    PaidAmount,
    Status,
    DueDate,
    Comments,
    LastReminderSentAt,
    ReminderCount,
}

#[derive(Iden)]
pub enum InvoicePayment {
    Table,
    Id,
    CreatedDate,
    LastModified,
    InvoiceId,
    Amount,
    Mode,
    TransactionRef,
    Comment,
    PaymentDate,
    RecordedBy,
}
