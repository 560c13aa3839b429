use sea_orm_migration::prelude::*;

use super::m20250714_100001_create_identity_tables::{RoleClaims, Roles};
use crate::seed;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Fixed reference data. Ids are deterministic, so conflicts
        // mean the row is already there and can be skipped.
        for (role, claims) in seed::builtin_roles() {
            let insert = Query::insert()
                .into_table(Roles::Table)
                .columns([
                    Roles::Id,
                    Roles::Name,
                    Roles::NormalizedName,
                    Roles::ConcurrencyStamp,
                ])
                .values_panic([
                    role.id.into(),
                    role.name.into(),
                    role.normalized_name.into(),
                    role.concurrency_stamp.into(),
                ])
                .on_conflict(OnConflict::column(Roles::Id).do_nothing().to_owned())
                .to_owned();
            manager.exec_stmt(insert).await?;

            for claim in claims {
                let insert = Query::insert()
                    .into_table(RoleClaims::Table)
                    .columns([
                        RoleClaims::Id,
                        RoleClaims::RoleId,
                        RoleClaims::ClaimType,
                        RoleClaims::ClaimValue,
                    ])
                    .values_panic([
                        claim.id.into(),
                        claim.role_id.into(),
                        claim.claim_type.into(),
                        claim.claim_value.into(),
                    ])
                    .on_conflict(OnConflict::column(RoleClaims::Id).do_nothing().to_owned())
                    .to_owned();
                manager.exec_stmt(insert).await?;
            }
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (role, _) in seed::builtin_roles() {
            let delete = Query::delete()
                .from_table(RoleClaims::Table)
                .and_where(Expr::col(RoleClaims::RoleId).eq(role.id.clone()))
                .to_owned();
            manager.exec_stmt(delete).await?;

            let delete = Query::delete()
                .from_table(Roles::Table)
                .and_where(Expr::col(Roles::Id).eq(role.id))
                .to_owned();
            manager.exec_stmt(delete).await?;
        }

        Ok(())
    }
}
