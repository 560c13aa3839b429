use sea_orm::entity::prelude::*;

/// Role row. The id is the lower-cased role name, so the built-in
/// roles keep the same identity on every database.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub normalized_name: String,
    pub concurrency_stamp: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_claims::Entity")]
    RoleClaims,
    #[sea_orm(has_many = "super::account_roles::Entity")]
    AccountRoles,
}

impl Related<super::role_claims::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleClaims.def()
    }
}

impl Related<super::account_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
