use clinic_persistence::{
    config::AppConfig,
    db::{OrmConn, create_orm_conn, run_migrations},
    entity::{Doctors, Patients, accounts, doctors, patients},
    services::{identity_service, profile_service},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,clinic_persistence=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Migrations carry the role/claim seed; demo accounts come on top.
    run_migrations(&orm).await?;

    let doctor_account = ensure_account(&orm, "doctor@example.com", "doctor123").await?;
    let patient_account = ensure_account(&orm, "patient@example.com", "patient123").await?;

    let doctor = Doctors::find()
        .filter(doctors::Column::AccountId.eq(doctor_account.id))
        .one(&orm)
        .await?;
    if doctor.is_none() {
        profile_service::create_doctor(&orm, doctor_account.id, "Demo Doctor", "Psychology")
            .await?;
        tracing::info!(email = %doctor_account.email, "ensured doctor profile");
    }

    let patient = Patients::find()
        .filter(patients::Column::AccountId.eq(patient_account.id))
        .one(&orm)
        .await?;
    if patient.is_none() {
        profile_service::create_patient(&orm, patient_account.id, "Demo Patient").await?;
        tracing::info!(email = %patient_account.email, "ensured patient profile");
    }

    tracing::info!(
        doctor_account = %doctor_account.id,
        patient_account = %patient_account.id,
        "seed completed"
    );
    Ok(())
}

async fn ensure_account(
    orm: &OrmConn,
    email: &str,
    password: &str,
) -> anyhow::Result<accounts::Model> {
    if let Some(account) = identity_service::find_account_by_email(orm, email).await? {
        return Ok(account);
    }
    let account = identity_service::create_account(orm, email, password).await?;
    tracing::info!(email, "created account");
    Ok(account)
}
