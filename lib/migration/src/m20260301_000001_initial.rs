use sea_orm_migration::prelude::*;

use crate::datatype::{timestamp, timestamp_null, uuid_char, uuid_char_null};

#[derive(DeriveMigrationName)]
pub struct Migration;

const UNIQUE_ADMIN_EMAIL_INDEX: &str = "index-Admin-Email-Unique";
const CLIENT_OWNER_INDEX: &str = "index-Client-OwnerId";
const CASE_OWNER_INDEX: &str = "index-LegalCase-OwnerId";
const HEARING_CASE_INDEX: &str = "index-Hearing-CaseId-HearingDate";
const COMMENT_CASE_INDEX: &str = "index-Comment-CaseId-CreatedDate";
const ACCESS_LINK_STATUS_INDEX: &str = "index-AccessLink-Status-ExpiresAt";
const ACCESS_LINK_CASE_INDEX: &str = "index-AccessLink-CaseId";
const HISTORY_ENTITY_INDEX: &str = "index-History-EntityId";
const HISTORY_CREATED_DATE_INDEX: &str = "index-History-CreatedDate";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admin::Table)
                    .if_not_exists()
                    .col(uuid_char(Admin::Id).primary_key())
                    .col(timestamp(Admin::CreatedDate, manager))
                    .col(timestamp(Admin::LastModified, manager))
                    .col(ColumnDef::new(Admin::Name).string().not_null())
                    .col(ColumnDef::new(Admin::Email).string().not_null())
                    .col(ColumnDef::new(Admin::Phone).string().null())
                    .col(ColumnDef::new(Admin::Role).string().not_null())
                    .col(timestamp_null(Admin::DeactivatedAt, manager))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_ADMIN_EMAIL_INDEX)
                    .table(Admin::Table)
                    .col(Admin::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(uuid_char(Client::Id).primary_key())
                    .col(timestamp(Client::CreatedDate, manager))
                    .col(timestamp(Client::LastModified, manager))
                    .col(uuid_char(Client::OwnerId))
                    .col(ColumnDef::new(Client::Name).string().not_null())
                    .col(ColumnDef::new(Client::Email).string().not_null())
                    .col(ColumnDef::new(Client::Phone).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Client-OwnerId")
                            .from_tbl(Client::Table)
                            .from_col(Client::OwnerId)
                            .to_tbl(Admin::Table)
                            .to_col(Admin::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(CLIENT_OWNER_INDEX)
                    .table(Client::Table)
                    .col(Client::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LegalCase::Table)
                    .if_not_exists()
                    .col(uuid_char(LegalCase::Id).primary_key())
                    .col(timestamp(LegalCase::CreatedDate, manager))
                    .col(timestamp(LegalCase::LastModified, manager))
                    .col(uuid_char(LegalCase::OwnerId))
                    .col(uuid_char(LegalCase::ClientId))
                    .col(ColumnDef::new(LegalCase::Title).string().not_null())
                    .col(ColumnDef::new(LegalCase::CaseNumber).string().not_null())
                    .col(ColumnDef::new(LegalCase::Description).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-LegalCase-OwnerId")
                            .from_tbl(LegalCase::Table)
                            .from_col(LegalCase::OwnerId)
                            .to_tbl(Admin::Table)
                            .to_col(Admin::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-LegalCase-ClientId")
                            .from_tbl(LegalCase::Table)
                            .from_col(LegalCase::ClientId)
                            .to_tbl(Client::Table)
                            .to_col(Client::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(CASE_OWNER_INDEX)
                    .table(LegalCase::Table)
                    .col(LegalCase::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Hearing::Table)
                    .if_not_exists()
                    .col(uuid_char(Hearing::Id).primary_key())
                    .col(timestamp(Hearing::CreatedDate, manager))
                    .col(uuid_char(Hearing::CaseId))
                    .col(timestamp(Hearing::HearingDate, manager))
                    .col(ColumnDef::new(Hearing::Title).string().not_null())
                    .col(ColumnDef::new(Hearing::Notes).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Hearing-CaseId")
                            .from_tbl(Hearing::Table)
                            .from_col(Hearing::CaseId)
                            .to_tbl(LegalCase::Table)
                            .to_col(LegalCase::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(HEARING_CASE_INDEX)
                    .table(Hearing::Table)
                    .col(Hearing::CaseId)
                    .col(Hearing::HearingDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccessLink::Table)
                    .if_not_exists()
                    .col(uuid_char(AccessLink::Id).primary_key())
                    .col(timestamp(AccessLink::CreatedDate, manager))
                    .col(timestamp(AccessLink::LastModified, manager))
                    .col(uuid_char(AccessLink::CaseId))
                    .col(uuid_char_null(AccessLink::HearingId))
                    .col(ColumnDef::new(AccessLink::Title).string().not_null())
                    .col(ColumnDef::new(AccessLink::Description).text().null())
                    .col(ColumnDef::new(AccessLink::Status).string().not_null())
                    .col(ColumnDef::new(AccessLink::SecretHash).string().not_null())
                    .col(timestamp(AccessLink::ExpiresAt, manager))
                    .col(uuid_char(AccessLink::CreatedBy))
                    .col(ColumnDef::new(AccessLink::ContactEmail).string().not_null())
                    .col(ColumnDef::new(AccessLink::ContactPhone).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-AccessLink-CaseId")
                            .from_tbl(AccessLink::Table)
                            .from_col(AccessLink::CaseId)
                            .to_tbl(LegalCase::Table)
                            .to_col(LegalCase::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-AccessLink-HearingId")
                            .from_tbl(AccessLink::Table)
                            .from_col(AccessLink::HearingId)
                            .to_tbl(Hearing::Table)
                            .to_col(Hearing::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-AccessLink-CreatedBy")
                            .from_tbl(AccessLink::Table)
                            .from_col(AccessLink::CreatedBy)
                            .to_tbl(Admin::Table)
                            .to_col(Admin::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(ACCESS_LINK_STATUS_INDEX)
                    .table(AccessLink::Table)
                    .col(AccessLink::Status)
                    .col(AccessLink::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(ACCESS_LINK_CASE_INDEX)
                    .table(AccessLink::Table)
                    .col(AccessLink::CaseId)
                    .to_owned(),
            )
            .await?;

        // author_access_link_id stays without a foreign key, retention deletes spent links
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(uuid_char(Comment::Id).primary_key())
                    .col(timestamp(Comment::CreatedDate, manager))
                    .col(uuid_char(Comment::CaseId))
                    .col(uuid_char_null(Comment::HearingId))
                    .col(uuid_char_null(Comment::AuthorAdminId))
                    .col(uuid_char_null(Comment::AuthorAccessLinkId))
                    .col(ColumnDef::new(Comment::Text).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Comment-CaseId")
                            .from_tbl(Comment::Table)
                            .from_col(Comment::CaseId)
                            .to_tbl(LegalCase::Table)
                            .to_col(LegalCase::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Comment-HearingId")
                            .from_tbl(Comment::Table)
                            .from_col(Comment::HearingId)
                            .to_tbl(Hearing::Table)
                            .to_col(Hearing::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Comment-AuthorAdminId")
                            .from_tbl(Comment::Table)
                            .from_col(Comment::AuthorAdminId)
                            .to_tbl(Admin::Table)
                            .to_col(Admin::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(COMMENT_CASE_INDEX)
                    .table(Comment::Table)
                    .col(Comment::CaseId)
                    .col(Comment::CreatedDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Attachment::Table)
                    .if_not_exists()
                    .col(uuid_char(Attachment::Id).primary_key())
                    .col(timestamp(Attachment::CreatedDate, manager))
                    .col(uuid_char(Attachment::CommentId))
                    .col(ColumnDef::new(Attachment::FileName).string().not_null())
                    .col(ColumnDef::new(Attachment::MediaType).string().not_null())
                    .col(ColumnDef::new(Attachment::Size).big_integer().not_null())
                    .col(ColumnDef::new(Attachment::StorageKey).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Attachment-CommentId")
                            .from_tbl(Attachment::Table)
                            .from_col(Attachment::CommentId)
                            .to_tbl(Comment::Table)
                            .to_col(Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(History::Table)
                    .if_not_exists()
                    .col(uuid_char(History::Id).primary_key())
                    .col(timestamp(History::CreatedDate, manager))
                    .col(ColumnDef::new(History::Action).string().not_null())
                    .col(uuid_char(History::EntityId))
                    .col(ColumnDef::new(History::EntityType).string().not_null())
                    .col(uuid_char_null(History::ActorId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(HISTORY_ENTITY_INDEX)
                    .table(History::Table)
                    .col(History::EntityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(HISTORY_CREATED_DATE_INDEX)
                    .table(History::Table)
                    .col(History::CreatedDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            History::Table.into_iden(),
            Attachment::Table.into_iden(),
            Comment::Table.into_iden(),
            AccessLink::Table.into_iden(),
            Hearing::Table.into_iden(),
            LegalCase::Table.into_iden(),
            Client::Table.into_iden(),
            Admin::Table.into_iden(),
        ] {
            manager
                .drop_table(Table::drop().table(table).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
pub enum Admin {
    Table,
    Id,
    CreatedDate,
    LastModified,
    Name,
    Email,
    Phone,
    Role,
    DeactivatedAt,
}

#[derive(Iden)]
pub enum Client {
    Table,
    Id,
    CreatedDate,
    LastModified,
    OwnerId,
    Name,
    Email,
    Phone,
}

#[derive(Iden)]
pub enum LegalCase {
    Table,
    Id,
    CreatedDate,
    LastModified,
    OwnerId,
    ClientId,
    Title,
    CaseNumber,
    Description,
}

#[derive(Iden)]
pub enum Hearing {
    Table,
    Id,
    CreatedDate,
    CaseId,
    HearingDate,
    Title,
    Notes,
}

#[derive(Iden)]
pub enum AccessLink {
    Table,
    Id,
    CreatedDate,
    LastModified,
    CaseId,
    HearingId,
    Title,
    Description,
    Status,
    SecretHash,
    ExpiresAt,
    CreatedBy,
    ContactEmail,
    ContactPhone,
}

#[derive(Iden)]
pub enum Comment {
    Table,
    Id,
    CreatedDate,
    CaseId,
    HearingId,
    AuthorAdminId,
    AuthorAccessLinkId,
    Text,
}

#[derive(Iden)]
pub enum Attachment {
    Table,
    Id,
    CreatedDate,
    CommentId,
    FileName,
    MediaType,
    Size,
    StorageKey,
}

#[derive(Iden)]
pub enum History {
    Table,
    Id,
    CreatedDate,
    Action,
    EntityId,
    EntityType,
    ActorId,
}
