use sea_orm_migration::{prelude::*, schema::*};

use super::m20250714_100002_create_profile_tables::{Doctors, Patients};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Diseases::Table)
                    .if_not_exists()
                    .col(pk_uuid(Diseases::Id))
                    .col(uuid(Diseases::DoctorId))
                    .col(string(Diseases::Name))
                    .col(text_null(Diseases::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-diseases-doctor")
                            .from(Diseases::Table, Diseases::DoctorId)
                            .to(Doctors::Table, Doctors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // video_type holds the enum's text form, not an ordinal.
        manager
            .create_table(
                Table::create()
                    .table(Videos::Table)
                    .if_not_exists()
                    .col(pk_uuid(Videos::Id))
                    .col(uuid(Videos::DoctorId))
                    .col(string(Videos::Title))
                    .col(string(Videos::Url))
                    .col(string_len(Videos::VideoType, 24))
                    .col(
                        timestamp_with_time_zone(Videos::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-videos-doctor")
                            .from(Videos::Table, Videos::DoctorId)
                            .to(Doctors::Table, Doctors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PatientComments::Table)
                    .if_not_exists()
                    .col(pk_uuid(PatientComments::Id))
                    .col(uuid(PatientComments::DoctorId))
                    .col(uuid(PatientComments::PatientId))
                    .col(text(PatientComments::Body))
                    .col(
                        timestamp_with_time_zone(PatientComments::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-patient_comments-doctor")
                            .from(PatientComments::Table, PatientComments::DoctorId)
                            .to(Doctors::Table, Doctors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-patient_comments-patient")
                            .from(PatientComments::Table, PatientComments::PatientId)
                            .to(Patients::Table, Patients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Disease history join table, nothing but the pair.
        manager
            .create_table(
                Table::create()
                    .table(PatientDiseases::Table)
                    .if_not_exists()
                    .col(uuid(PatientDiseases::PatientId))
                    .col(uuid(PatientDiseases::DiseaseId))
                    .primary_key(
                        Index::create()
                            .col(PatientDiseases::PatientId)
                            .col(PatientDiseases::DiseaseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-patient_diseases-patient")
                            .from(PatientDiseases::Table, PatientDiseases::PatientId)
                            .to(Patients::Table, Patients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-patient_diseases-disease")
                            .from(PatientDiseases::Table, PatientDiseases::DiseaseId)
                            .to(Diseases::Table, Diseases::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PatientDiseases::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PatientComments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Videos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Diseases::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Diseases {
    Table,
    Id,
    DoctorId,
    Name,
    Description,
}

#[derive(DeriveIden)]
pub enum Videos {
    Table,
    Id,
    DoctorId,
    Title,
    Url,
    VideoType,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum PatientComments {
    Table,
    Id,
    DoctorId,
    PatientId,
    Body,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum PatientDiseases {
    Table,
    PatientId,
    DiseaseId,
}
