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
                    .table(Quizzes::Table)
                    .if_not_exists()
                    .col(pk_uuid(Quizzes::Id))
                    .col(uuid(Quizzes::DoctorId))
                    .col(string(Quizzes::Title))
                    .col(
                        timestamp_with_time_zone(Quizzes::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-quizzes-doctor")
                            .from(Quizzes::Table, Quizzes::DoctorId)
                            .to(Doctors::Table, Doctors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(pk_uuid(Questions::Id))
                    .col(uuid(Questions::QuizId))
                    .col(text(Questions::Prompt))
                    .col(integer(Questions::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-questions-quiz")
                            .from(Questions::Table, Questions::QuizId)
                            .to(Quizzes::Table, Quizzes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(QuestionOptions::Table)
                    .if_not_exists()
                    .col(pk_uuid(QuestionOptions::Id))
                    .col(uuid(QuestionOptions::QuestionId))
                    .col(string(QuestionOptions::Label))
                    .col(boolean(QuestionOptions::IsCorrect))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-question_options-question")
                            .from(QuestionOptions::Table, QuestionOptions::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(QuizResults::Table)
                    .if_not_exists()
                    .col(pk_uuid(QuizResults::Id))
                    .col(uuid(QuizResults::QuizId))
                    .col(uuid(QuizResults::PatientId))
                    .col(integer(QuizResults::Score))
                    .col(
                        timestamp_with_time_zone(QuizResults::TakenAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-quiz_results-quiz")
                            .from(QuizResults::Table, QuizResults::QuizId)
                            .to(Quizzes::Table, Quizzes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-quiz_results-patient")
                            .from(QuizResults::Table, QuizResults::PatientId)
                            .to(Patients::Table, Patients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuizResults::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(QuestionOptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Quizzes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quizzes {
    Table,
    Id,
    DoctorId,
    Title,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Questions {
    Table,
    Id,
    QuizId,
    Prompt,
    Position,
}

#[derive(DeriveIden)]
pub enum QuestionOptions {
    Table,
    Id,
    QuestionId,
    Label,
    IsCorrect,
}

#[derive(DeriveIden)]
pub enum QuizResults {
    Table,
    Id,
    QuizId,
    PatientId,
    Score,
    TakenAt,
}
