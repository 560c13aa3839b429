use sea_orm::entity::prelude::*;

/// Patient profile, 1:1 with an account (restrict on the account
/// side, same rule as doctors).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "patients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub account_id: Uuid,
    pub full_name: String,
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
    #[sea_orm(has_many = "super::patient_comments::Entity")]
    PatientComments,
    #[sea_orm(has_many = "super::quiz_results::Entity")]
    QuizResults,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl Related<super::patient_comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PatientComments.def()
    }
}

impl Related<super::quiz_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuizResults.def()
    }
}

// Disease history goes through the patient_diseases join table.
impl Related<super::diseases::Entity> for Entity {
    fn to() -> RelationDef {
        super::patient_diseases::Relation::Diseases.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::patient_diseases::Relation::Patients.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
