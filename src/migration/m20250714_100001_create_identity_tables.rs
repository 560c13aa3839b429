use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(pk_uuid(Accounts::Id))
                    .col(string_uniq(Accounts::Email))
                    .col(string(Accounts::PasswordHash))
                    .col(
                        timestamp_with_time_zone(Accounts::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(string(Roles::Id).primary_key())
                    .col(string(Roles::Name))
                    .col(string(Roles::NormalizedName))
                    .col(string(Roles::ConcurrencyStamp))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RoleClaims::Table)
                    .if_not_exists()
                    .col(string(RoleClaims::Id).primary_key())
                    .col(string(RoleClaims::RoleId))
                    .col(string(RoleClaims::ClaimType))
                    .col(string(RoleClaims::ClaimValue))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-role_claims-role")
                            .from(RoleClaims::Table, RoleClaims::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccountRoles::Table)
                    .if_not_exists()
                    .col(uuid(AccountRoles::AccountId))
                    .col(string(AccountRoles::RoleId))
                    .primary_key(
                        Index::create()
                            .col(AccountRoles::AccountId)
                            .col(AccountRoles::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-account_roles-account")
                            .from(AccountRoles::Table, AccountRoles::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-account_roles-role")
                            .from(AccountRoles::Table, AccountRoles::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccountRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RoleClaims::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Accounts {
    Table,
    Id,
    Email,
    PasswordHash,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Roles {
    Table,
    Id,
    Name,
    NormalizedName,
    ConcurrencyStamp,
}

#[derive(DeriveIden)]
pub enum RoleClaims {
    Table,
    Id,
    RoleId,
    ClaimType,
    ClaimValue,
}

#[derive(DeriveIden)]
pub enum AccountRoles {
    Table,
    AccountId,
    RoleId,
}
