use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(OAuthAccounts::Table)
                .if_not_exists()
                .col(ColumnDef::new(OAuthAccounts::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(OAuthAccounts::UserId).integer().not_null())
                .col(ColumnDef::new(OAuthAccounts::Type).string().not_null())
                .col(ColumnDef::new(OAuthAccounts::AId).string().not_null())
                .col(ColumnDef::new(OAuthAccounts::Email).string().null())
                .col(ColumnDef::new(OAuthAccounts::Name).string().null())
                .col(ColumnDef::new(OAuthAccounts::FirstName).string().null())
                .col(ColumnDef::new(OAuthAccounts::LastName).string().null())
                .col(ColumnDef::new(OAuthAccounts::Gender).string().null())
                .col(ColumnDef::new(OAuthAccounts::Picture).string().null())
                .col(ColumnDef::new(OAuthAccounts::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(OAuthAccounts::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_o_auth_accounts_user")
                        .from(OAuthAccounts::Table, OAuthAccounts::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        // Lookups go by (type, a_id). Not unique: duplicate rows resolve to the newest.
        m.create_index(
            Index::create()
                .name("idx_o_auth_accounts_type_a_id")
                .table(OAuthAccounts::Table)
                .col(OAuthAccounts::Type)
                .col(OAuthAccounts::AId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_o_auth_accounts_user_id")
                .table(OAuthAccounts::Table)
                .col(OAuthAccounts::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Indexes go with the table
        m.drop_table(Table::drop().table(OAuthAccounts::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum OAuthAccounts {
    #[sea_orm(iden = "o_auth_accounts")]
    Table,
    Id,
    UserId,
    Type,
    #[sea_orm(iden = "a_id")]
    AId,
    Email,
    Name,
    FirstName,
    LastName,
    Gender,
    Picture,
    CreatedAt,
    UpdatedAt,
}
