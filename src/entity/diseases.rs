use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "diseases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::doctors::Entity",
        from = "Column::DoctorId",
        to = "super::doctors::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Doctors,
}

impl Related<super::doctors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctors.def()
    }
}

impl Related<super::patients::Entity> for Entity {
    fn to() -> RelationDef {
        super::patient_diseases::Relation::Patients.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::patient_diseases::Relation::Diseases.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
