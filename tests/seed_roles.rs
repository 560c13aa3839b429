use std::collections::HashSet;

use clinic_persistence::seed::{
    DOCTOR_PERMISSIONS, DOCTOR_ROLE, PATIENT_PERMISSIONS, PATIENT_ROLE, PERMISSION_CLAIM_TYPE,
    builtin_roles, role_id, role_with_permissions,
};

#[test]
fn role_identity_follows_name_casing() {
    let (role, _) = role_with_permissions(DOCTOR_ROLE, &["read"]);
    assert_eq!(role.id, "doctor");
    assert_eq!(role.name, "Doctor");
    assert_eq!(role.normalized_name, "DOCTOR");
    assert_eq!(
        role.concurrency_stamp,
        "00000000-0000-0000-0000-000000000000"
    );
}

#[test]
fn one_claim_per_permission_with_distinct_ids() {
    let (role, claims) = role_with_permissions(DOCTOR_ROLE, &DOCTOR_PERMISSIONS);
    assert_eq!(claims.len(), DOCTOR_PERMISSIONS.len());

    let ids: HashSet<&str> = claims.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), claims.len(), "claim ids must be distinct");

    for claim in &claims {
        assert_eq!(claim.claim_type, PERMISSION_CLAIM_TYPE);
        assert_eq!(claim.role_id, role.id);
        assert!(DOCTOR_PERMISSIONS.contains(&claim.claim_value.as_str()));
    }

    let values: HashSet<&str> = claims.iter().map(|c| c.claim_value.as_str()).collect();
    assert_eq!(values.len(), DOCTOR_PERMISSIONS.len());
}

#[test]
fn seeding_is_deterministic_across_calls() {
    let first = role_with_permissions(PATIENT_ROLE, &PATIENT_PERMISSIONS);
    let second = role_with_permissions(PATIENT_ROLE, &PATIENT_PERMISSIONS);
    assert_eq!(first, second);
}

#[test]
fn builtin_roles_match_shipped_policy() {
    let roles = builtin_roles();
    assert_eq!(roles.len(), 2);

    let (doctor, doctor_claims) = &roles[0];
    assert_eq!(doctor.id, role_id(DOCTOR_ROLE));
    let doctor_values: Vec<&str> = doctor_claims.iter().map(|c| c.claim_value.as_str()).collect();
    assert_eq!(doctor_values, vec!["update", "read", "delete", "create"]);

    let (patient, patient_claims) = &roles[1];
    assert_eq!(patient.id, role_id(PATIENT_ROLE));
    let patient_values: Vec<&str> = patient_claims.iter().map(|c| c.claim_value.as_str()).collect();
    assert_eq!(patient_values, vec!["read"]);
}
