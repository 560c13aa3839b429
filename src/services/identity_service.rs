use argon2::{
    Argon2, PasswordHasher,
    password_hash::{rand_core::OsRng, SaltString},
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    db::{DbPool, OrmConn},
    entity::{AccountRoles, Accounts, RoleClaims, Roles, account_roles, accounts, role_claims},
    error::{AppError, AppResult},
    seed::PERMISSION_CLAIM_TYPE,
};

pub async fn create_account(
    orm: &OrmConn,
    email: &str,
    password: &str,
) -> AppResult<accounts::Model> {
    let exist = Accounts::find()
        .filter(accounts::Column::Email.eq(email))
        .one(orm)
        .await?;
    if exist.is_some() {
        return Err(AppError::BadRequest("Email is already taken".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();

    let account = accounts::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_owned()),
        password_hash: Set(password_hash),
        created_at: NotSet,
    }
    .insert(orm)
    .await?;

    Ok(account)
}

pub async fn find_account_by_email(
    orm: &OrmConn,
    email: &str,
) -> AppResult<Option<accounts::Model>> {
    let account = Accounts::find()
        .filter(accounts::Column::Email.eq(email))
        .one(orm)
        .await?;
    Ok(account)
}

/// Attach a role to an account. Assigning the same role twice is a
/// no-op.
pub async fn assign_role(orm: &OrmConn, account_id: Uuid, role_id: &str) -> AppResult<()> {
    let role = Roles::find_by_id(role_id.to_owned()).one(orm).await?;
    if role.is_none() {
        return Err(AppError::NotFound);
    }

    let link = account_roles::ActiveModel {
        account_id: Set(account_id),
        role_id: Set(role_id.to_owned()),
    };
    let inserted = AccountRoles::insert(link)
        .on_conflict(
            OnConflict::columns([
                account_roles::Column::AccountId,
                account_roles::Column::RoleId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(orm)
        .await?;
    if inserted == 0 {
        tracing::debug!(%account_id, role_id, "role already assigned");
    }

    Ok(())
}

/// Attach a permission claim to a role. The claim id is derived from
/// the pair, so re-attaching is a no-op.
pub async fn attach_claim(orm: &OrmConn, role_id: &str, permission: &str) -> AppResult<()> {
    let role = Roles::find_by_id(role_id.to_owned()).one(orm).await?;
    if role.is_none() {
        return Err(AppError::NotFound);
    }

    let claim = role_claims::ActiveModel {
        id: Set(format!("{role_id}:{permission}")),
        role_id: Set(role_id.to_owned()),
        claim_type: Set(PERMISSION_CLAIM_TYPE.to_owned()),
        claim_value: Set(permission.to_owned()),
    };
    let inserted = RoleClaims::insert(claim)
        .on_conflict(
            OnConflict::column(role_claims::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(orm)
        .await?;
    if inserted == 0 {
        tracing::debug!(role_id, permission, "claim already attached");
    }

    Ok(())
}

/// Whether any of the account's roles carries the permission claim.
pub async fn check_claim(pool: &DbPool, account_id: Uuid, permission: &str) -> AppResult<bool> {
    let (allowed,): (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM account_roles ar
            JOIN role_claims rc ON rc.role_id = ar.role_id
            WHERE ar.account_id = $1
              AND rc.claim_type = $2
              AND rc.claim_value = $3
        )
        "#,
    )
    .bind(account_id)
    .bind(PERMISSION_CLAIM_TYPE)
    .bind(permission)
    .fetch_one(pool)
    .await?;

    Ok(allowed)
}
