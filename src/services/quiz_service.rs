use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    dto::quiz::NewQuiz,
    entity::{Doctors, Patients, Quizzes, QuizResults, options, questions, quiz_results, quizzes},
    error::{AppError, AppResult},
};

/// Create a quiz with its questions and options in one transaction,
/// so a half-written quiz never becomes visible.
pub async fn create_quiz(
    orm: &OrmConn,
    doctor_id: Uuid,
    payload: NewQuiz,
) -> AppResult<quizzes::Model> {
    let doctor = Doctors::find_by_id(doctor_id).one(orm).await?;
    if doctor.is_none() {
        return Err(AppError::NotFound);
    }

    let txn = orm.begin().await?;

    let quiz = quizzes::ActiveModel {
        id: Set(Uuid::new_v4()),
        doctor_id: Set(doctor_id),
        title: Set(payload.title),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    for (idx, question) in payload.questions.into_iter().enumerate() {
        let inserted = questions::ActiveModel {
            id: Set(Uuid::new_v4()),
            quiz_id: Set(quiz.id),
            prompt: Set(question.prompt),
            position: Set(idx as i32),
        }
        .insert(&txn)
        .await?;

        for option in question.options {
            options::ActiveModel {
                id: Set(Uuid::new_v4()),
                question_id: Set(inserted.id),
                label: Set(option.label),
                is_correct: Set(option.is_correct),
            }
            .insert(&txn)
            .await?;
        }
    }

    txn.commit().await?;

    Ok(quiz)
}

pub async fn record_result(
    orm: &OrmConn,
    quiz_id: Uuid,
    patient_id: Uuid,
    score: i32,
) -> AppResult<quiz_results::Model> {
    let quiz = Quizzes::find_by_id(quiz_id).one(orm).await?;
    if quiz.is_none() {
        return Err(AppError::NotFound);
    }
    let patient = Patients::find_by_id(patient_id).one(orm).await?;
    if patient.is_none() {
        return Err(AppError::NotFound);
    }

    let result = quiz_results::ActiveModel {
        id: Set(Uuid::new_v4()),
        quiz_id: Set(quiz_id),
        patient_id: Set(patient_id),
        score: Set(score),
        taken_at: NotSet,
    }
    .insert(orm)
    .await?;

    Ok(result)
}

pub async fn results_for_patient(
    orm: &OrmConn,
    patient_id: Uuid,
) -> AppResult<Vec<quiz_results::Model>> {
    let results = QuizResults::find()
        .filter(quiz_results::Column::PatientId.eq(patient_id))
        .order_by_desc(quiz_results::Column::TakenAt)
        .all(orm)
        .await?;
    Ok(results)
}
