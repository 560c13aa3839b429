use sea_orm::entity::prelude::*;

/// Disease-history join row. No identity beyond the pair.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patient_diseases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub patient_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub disease_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patients::Entity",
        from = "Column::PatientId",
        to = "super::patients::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Patients,
    #[sea_orm(
        belongs_to = "super::diseases::Entity",
        from = "Column::DiseaseId",
        to = "super::diseases::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Diseases,
}

impl Related<super::patients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patients.def()
    }
}

impl Related<super::diseases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Diseases.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
