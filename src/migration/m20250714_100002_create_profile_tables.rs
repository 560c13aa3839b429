use sea_orm_migration::{prelude::*, schema::*};

use super::m20250714_100001_create_identity_tables::Accounts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Profile rows pin their account: the account delete is
        // restricted until the profile is removed first.
        manager
            .create_table(
                Table::create()
                    .table(Doctors::Table)
                    .if_not_exists()
                    .col(pk_uuid(Doctors::Id))
                    .col(uuid_uniq(Doctors::AccountId))
                    .col(string(Doctors::FullName))
                    .col(string(Doctors::Specialty))
                    .col(
                        timestamp_with_time_zone(Doctors::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-doctors-account")
                            .from(Doctors::Table, Doctors::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Patients::Table)
                    .if_not_exists()
                    .col(pk_uuid(Patients::Id))
                    .col(uuid_uniq(Patients::AccountId))
                    .col(string(Patients::FullName))
                    .col(
                        timestamp_with_time_zone(Patients::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-patients-account")
                            .from(Patients::Table, Patients::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Patients::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Doctors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Doctors {
    Table,
    Id,
    AccountId,
    FullName,
    Specialty,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Patients {
    Table,
    Id,
    AccountId,
    FullName,
    CreatedAt,
}
