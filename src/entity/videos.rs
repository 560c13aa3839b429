use sea_orm::entity::prelude::*;

/// Persisted as text, not as the variant's ordinal, so stored rows
/// survive reordering of the enum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
pub enum VideoType {
    #[sea_orm(string_value = "educational")]
    Educational,
    #[sea_orm(string_value = "therapy")]
    Therapy,
    #[sea_orm(string_value = "awareness")]
    Awareness,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "videos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub title: String,
    pub url: String,
    pub video_type: VideoType,
    pub created_at: DateTimeWithTimeZone,
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

impl ActiveModelBehavior for ActiveModel {}
