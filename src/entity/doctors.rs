use sea_orm::entity::prelude::*;

/// Doctor profile, 1:1 with an account. The account cannot be deleted
/// while this row exists; everything the doctor authored goes away
/// with the doctor.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "doctors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub account_id: Uuid,
    pub full_name: String,
    pub specialty: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Accounts,
    #[sea_orm(has_many = "super::videos::Entity")]
    Videos,
    #[sea_orm(has_many = "super::diseases::Entity")]
    Diseases,
    #[sea_orm(has_many = "super::patient_comments::Entity")]
    PatientComments,
    #[sea_orm(has_many = "super::quizzes::Entity")]
    Quizzes,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl Related<super::videos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Videos.def()
    }
}

impl Related<super::diseases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Diseases.def()
    }
}

impl Related<super::patient_comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PatientComments.def()
    }
}

impl Related<super::quizzes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quizzes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
