use clinic_persistence::{
    db::{create_orm_conn, create_pool, run_migrations},
    dto::quiz::{NewOption, NewQuestion, NewQuiz},
    entity::{
        Accounts, Diseases, PatientComments, PatientDiseases, QuestionOptions, Questions,
        QuizResults, Quizzes, RoleClaims, Roles, Videos, accounts, diseases, doctors,
        patient_comments, patients, role_claims, videos, videos::VideoType,
    },
    services::{identity_service, profile_service, quiz_service},
    state::AppState,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    Statement,
};
use serial_test::serial;
use uuid::Uuid;

fn database_url() -> Result<String, std::env::VarError> {
    std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL"))
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url).await?;
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean everything but the seeded roles/claims between runs.
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE quiz_results, question_options, questions, quizzes, patient_diseases, patient_comments, videos, diseases, doctors, patients, account_roles, accounts RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState { pool, orm })
}

async fn doctor_fixture(
    state: &AppState,
) -> anyhow::Result<(accounts::Model, doctors::Model)> {
    let account =
        identity_service::create_account(&state.orm, "doctor@clinic.test", "doctor-pass").await?;
    let doctor =
        profile_service::create_doctor(&state.orm, account.id, "Ada Bell", "Psychiatry").await?;
    Ok((account, doctor))
}

async fn patient_fixture(
    state: &AppState,
) -> anyhow::Result<(accounts::Model, patients::Model)> {
    let account =
        identity_service::create_account(&state.orm, "patient@clinic.test", "patient-pass")
            .await?;
    let patient = profile_service::create_patient(&state.orm, account.id, "Noa Hart").await?;
    Ok((account, patient))
}

#[tokio::test]
#[serial]
async fn seeded_roles_and_claims_are_present_and_stable() -> anyhow::Result<()> {
    let database_url = match database_url() {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run schema tests.");
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    let doctor_role = Roles::find_by_id("doctor".to_string())
        .one(&state.orm)
        .await?
        .expect("doctor role seeded");
    assert_eq!(doctor_role.name, "Doctor");
    assert_eq!(doctor_role.normalized_name, "DOCTOR");
    assert_eq!(
        doctor_role.concurrency_stamp,
        "00000000-0000-0000-0000-000000000000"
    );

    let doctor_claims = RoleClaims::find()
        .filter(role_claims::Column::RoleId.eq("doctor"))
        .all(&state.orm)
        .await?;
    let mut values: Vec<&str> = doctor_claims.iter().map(|c| c.claim_value.as_str()).collect();
    values.sort_unstable();
    assert_eq!(values, vec!["create", "delete", "read", "update"]);
    assert!(doctor_claims.iter().all(|c| c.claim_type == "permission"));

    let patient_claims = RoleClaims::find()
        .filter(role_claims::Column::RoleId.eq("patient"))
        .all(&state.orm)
        .await?;
    assert_eq!(patient_claims.len(), 1);
    assert_eq!(patient_claims[0].claim_value, "read");

    // Re-applying the migrations must not duplicate or reshape the seed.
    run_migrations(&state.orm).await?;
    assert_eq!(Roles::find().count(&state.orm).await?, 2);
    assert_eq!(RoleClaims::find().count(&state.orm).await?, 5);

    Ok(())
}

#[tokio::test]
#[serial]
async fn doctor_delete_cascades_and_account_delete_is_restricted() -> anyhow::Result<()> {
    let database_url = match database_url() {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run schema tests.");
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;
    let (doctor_account, doctor) = doctor_fixture(&state).await?;
    let (_, patient) = patient_fixture(&state).await?;

    let disease = diseases::ActiveModel {
        id: Set(Uuid::new_v4()),
        doctor_id: Set(doctor.id),
        name: Set("Generalized anxiety".into()),
        description: Set(None),
    }
    .insert(&state.orm)
    .await?;

    videos::ActiveModel {
        id: Set(Uuid::new_v4()),
        doctor_id: Set(doctor.id),
        title: Set("Breathing exercises".into()),
        url: Set("https://videos.clinic.test/breathing".into()),
        video_type: Set(VideoType::Therapy),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    patient_comments::ActiveModel {
        id: Set(Uuid::new_v4()),
        doctor_id: Set(doctor.id),
        patient_id: Set(patient.id),
        body: Set("Responding well to the new routine.".into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    let quiz = quiz_service::create_quiz(
        &state.orm,
        doctor.id,
        NewQuiz {
            title: "Sleep habits".into(),
            questions: vec![NewQuestion {
                prompt: "How many hours do you sleep?".into(),
                options: vec![
                    NewOption {
                        label: "Less than six".into(),
                        is_correct: false,
                    },
                    NewOption {
                        label: "Seven or more".into(),
                        is_correct: true,
                    },
                ],
            }],
        },
    )
    .await?;
    quiz_service::record_result(&state.orm, quiz.id, patient.id, 80).await?;
    profile_service::add_disease_history(&state.orm, patient.id, disease.id).await?;

    // The account is pinned while the profile exists.
    assert!(
        Accounts::delete_by_id(doctor_account.id)
            .exec(&state.orm)
            .await
            .is_err(),
        "account delete must be restricted while the doctor profile exists"
    );

    profile_service::delete_doctor(&state.orm, doctor.id).await?;

    assert_eq!(Diseases::find().count(&state.orm).await?, 0);
    assert_eq!(Videos::find().count(&state.orm).await?, 0);
    assert_eq!(PatientComments::find().count(&state.orm).await?, 0);
    assert_eq!(Quizzes::find().count(&state.orm).await?, 0);
    assert_eq!(Questions::find().count(&state.orm).await?, 0);
    assert_eq!(QuestionOptions::find().count(&state.orm).await?, 0);
    assert_eq!(QuizResults::find().count(&state.orm).await?, 0);
    assert_eq!(PatientDiseases::find().count(&state.orm).await?, 0);

    // The patient side is untouched by the doctor cascade.
    assert_eq!(
        Accounts::find().count(&state.orm).await?,
        2,
        "accounts are never cascade-deleted"
    );

    // With the profile gone the account can go too.
    profile_service::delete_account(&state.orm, doctor_account.id).await?;
    assert!(
        Accounts::find_by_id(doctor_account.id)
            .one(&state.orm)
            .await?
            .is_none()
    );

    Ok(())
}

#[tokio::test]
#[serial]
async fn patient_delete_cascades_results_comments_and_history() -> anyhow::Result<()> {
    let database_url = match database_url() {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run schema tests.");
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;
    let (_, doctor) = doctor_fixture(&state).await?;
    let (patient_account, patient) = patient_fixture(&state).await?;

    let disease = diseases::ActiveModel {
        id: Set(Uuid::new_v4()),
        doctor_id: Set(doctor.id),
        name: Set("Insomnia".into()),
        description: Set(Some("Chronic difficulty falling asleep".into())),
    }
    .insert(&state.orm)
    .await?;
    profile_service::add_disease_history(&state.orm, patient.id, disease.id).await?;

    patient_comments::ActiveModel {
        id: Set(Uuid::new_v4()),
        doctor_id: Set(doctor.id),
        patient_id: Set(patient.id),
        body: Set("Follow-up scheduled.".into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    let quiz = quiz_service::create_quiz(
        &state.orm,
        doctor.id,
        NewQuiz {
            title: "Mood check".into(),
            questions: vec![],
        },
    )
    .await?;
    quiz_service::record_result(&state.orm, quiz.id, patient.id, 55).await?;

    let results = quiz_service::results_for_patient(&state.orm, patient.id).await?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 55);

    profile_service::delete_patient(&state.orm, patient.id).await?;

    assert_eq!(QuizResults::find().count(&state.orm).await?, 0);
    assert_eq!(PatientComments::find().count(&state.orm).await?, 0);
    assert_eq!(PatientDiseases::find().count(&state.orm).await?, 0);

    // Authored content survives the patient.
    assert_eq!(Diseases::find().count(&state.orm).await?, 1);
    assert_eq!(Quizzes::find().count(&state.orm).await?, 1);

    profile_service::delete_account(&state.orm, patient_account.id).await?;

    Ok(())
}

#[tokio::test]
#[serial]
async fn disease_history_rejects_pairs_with_a_missing_side() -> anyhow::Result<()> {
    let database_url = match database_url() {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run schema tests.");
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;
    let (_, doctor) = doctor_fixture(&state).await?;
    let (_, patient) = patient_fixture(&state).await?;

    let disease = diseases::ActiveModel {
        id: Set(Uuid::new_v4()),
        doctor_id: Set(doctor.id),
        name: Set("Burnout".into()),
        description: Set(None),
    }
    .insert(&state.orm)
    .await?;

    assert!(
        profile_service::add_disease_history(&state.orm, patient.id, Uuid::new_v4())
            .await
            .is_err(),
        "unknown disease id must be rejected"
    );
    assert!(
        profile_service::add_disease_history(&state.orm, Uuid::new_v4(), disease.id)
            .await
            .is_err(),
        "unknown patient id must be rejected"
    );

    profile_service::add_disease_history(&state.orm, patient.id, disease.id).await?;
    // Same pair again is a no-op, not a duplicate.
    profile_service::add_disease_history(&state.orm, patient.id, disease.id).await?;
    assert_eq!(PatientDiseases::find().count(&state.orm).await?, 1);

    Ok(())
}

#[tokio::test]
#[serial]
async fn video_type_is_stored_as_text_and_claims_follow_roles() -> anyhow::Result<()> {
    let database_url = match database_url() {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run schema tests.");
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;
    let (doctor_account, doctor) = doctor_fixture(&state).await?;
    let (patient_account, _) = patient_fixture(&state).await?;

    let video = videos::ActiveModel {
        id: Set(Uuid::new_v4()),
        doctor_id: Set(doctor.id),
        title: Set("What is CBT?".into()),
        url: Set("https://videos.clinic.test/cbt".into()),
        video_type: Set(VideoType::Educational),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    // The column carries the mapped text, not an ordinal.
    let (stored,): (String,) = sqlx::query_as("SELECT video_type FROM videos WHERE id = $1")
        .bind(video.id)
        .fetch_one(&state.pool)
        .await?;
    assert_eq!(stored, "educational");

    let fetched = Videos::find_by_id(video.id)
        .one(&state.orm)
        .await?
        .expect("video round-trips");
    assert_eq!(fetched.video_type, VideoType::Educational);
    assert!(fetched.created_at <= chrono::Utc::now());

    // Profile creation assigned the seeded roles; claims follow.
    assert!(identity_service::check_claim(&state.pool, doctor_account.id, "create").await?);
    assert!(identity_service::check_claim(&state.pool, doctor_account.id, "read").await?);
    assert!(identity_service::check_claim(&state.pool, patient_account.id, "read").await?);
    assert!(!identity_service::check_claim(&state.pool, patient_account.id, "create").await?);

    Ok(())
}
