use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(ReporterAccounts::Table)
                .if_not_exists()
                .col(ColumnDef::new(ReporterAccounts::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(ReporterAccounts::UserId).integer().not_null().unique_key())
                .col(ColumnDef::new(ReporterAccounts::Account).string().not_null().unique_key())
                .col(ColumnDef::new(ReporterAccounts::Password).string().not_null().default(""))
                .col(ColumnDef::new(ReporterAccounts::Active).boolean().not_null().default(false))
                .col(ColumnDef::new(ReporterAccounts::ActivateToken).string().not_null().default(""))
                .col(ColumnDef::new(ReporterAccounts::ActExpTime).timestamp_with_time_zone().null())
                .col(ColumnDef::new(ReporterAccounts::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(ReporterAccounts::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_reporter_accounts_user")
                        .from(ReporterAccounts::Table, ReporterAccounts::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(ReporterAccounts::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum ReporterAccounts {
    Table,
    Id,
    UserId,
    Account,
    Password,
    Active,
    ActivateToken,
    ActExpTime,
    CreatedAt,
    UpdatedAt,
}
