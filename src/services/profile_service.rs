use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    entity::{
        Accounts, Doctors, PatientDiseases, Patients, doctors, patient_diseases, patients,
    },
    error::{AppError, AppResult},
    seed,
    services::identity_service,
};

pub async fn create_doctor(
    orm: &OrmConn,
    account_id: Uuid,
    full_name: &str,
    specialty: &str,
) -> AppResult<doctors::Model> {
    let account = Accounts::find_by_id(account_id).one(orm).await?;
    if account.is_none() {
        return Err(AppError::NotFound);
    }

    let exist = Doctors::find()
        .filter(doctors::Column::AccountId.eq(account_id))
        .one(orm)
        .await?;
    if exist.is_some() {
        return Err(AppError::Conflict(
            "account already has a doctor profile".to_string(),
        ));
    }

    let doctor = doctors::ActiveModel {
        id: Set(Uuid::new_v4()),
        account_id: Set(account_id),
        full_name: Set(full_name.to_owned()),
        specialty: Set(specialty.to_owned()),
        created_at: NotSet,
    }
    .insert(orm)
    .await?;

    identity_service::assign_role(orm, account_id, &seed::role_id(seed::DOCTOR_ROLE)).await?;

    Ok(doctor)
}

pub async fn create_patient(
    orm: &OrmConn,
    account_id: Uuid,
    full_name: &str,
) -> AppResult<patients::Model> {
    let account = Accounts::find_by_id(account_id).one(orm).await?;
    if account.is_none() {
        return Err(AppError::NotFound);
    }

    let exist = Patients::find()
        .filter(patients::Column::AccountId.eq(account_id))
        .one(orm)
        .await?;
    if exist.is_some() {
        return Err(AppError::Conflict(
            "account already has a patient profile".to_string(),
        ));
    }

    let patient = patients::ActiveModel {
        id: Set(Uuid::new_v4()),
        account_id: Set(account_id),
        full_name: Set(full_name.to_owned()),
        created_at: NotSet,
    }
    .insert(orm)
    .await?;

    identity_service::assign_role(orm, account_id, &seed::role_id(seed::PATIENT_ROLE)).await?;

    Ok(patient)
}

/// Record a disease in the patient's history. Recording the same pair
/// twice is a no-op; a missing patient or disease surfaces as a
/// foreign-key error from the database.
pub async fn add_disease_history(
    orm: &OrmConn,
    patient_id: Uuid,
    disease_id: Uuid,
) -> AppResult<()> {
    let link = patient_diseases::ActiveModel {
        patient_id: Set(patient_id),
        disease_id: Set(disease_id),
    };
    let inserted = PatientDiseases::insert(link)
        .on_conflict(
            OnConflict::columns([
                patient_diseases::Column::PatientId,
                patient_diseases::Column::DiseaseId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(orm)
        .await?;
    if inserted == 0 {
        tracing::debug!(%patient_id, %disease_id, "disease already on record");
    }

    Ok(())
}

/// Remove a doctor profile. Authored videos, diseases, comments and
/// quizzes go with it via the schema's cascades.
pub async fn delete_doctor(orm: &OrmConn, doctor_id: Uuid) -> AppResult<()> {
    let res = Doctors::delete_by_id(doctor_id).exec(orm).await?;
    if res.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

pub async fn delete_patient(orm: &OrmConn, patient_id: Uuid) -> AppResult<()> {
    let res = Patients::delete_by_id(patient_id).exec(orm).await?;
    if res.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

/// Delete an account once nothing references it. The profile tables
/// restrict the delete at the database level too; this check turns
/// that into a readable error instead of a constraint violation.
pub async fn delete_account(orm: &OrmConn, account_id: Uuid) -> AppResult<()> {
    let doctor = Doctors::find()
        .filter(doctors::Column::AccountId.eq(account_id))
        .one(orm)
        .await?;
    if doctor.is_some() {
        return Err(AppError::Conflict(
            "account still has a doctor profile".to_string(),
        ));
    }

    let patient = Patients::find()
        .filter(patients::Column::AccountId.eq(account_id))
        .one(orm)
        .await?;
    if patient.is_some() {
        return Err(AppError::Conflict(
            "account still has a patient profile".to_string(),
        ));
    }

    let res = Accounts::delete_by_id(account_id).exec(orm).await?;
    if res.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}
