use uuid::Uuid;

pub const PERMISSION_CLAIM_TYPE: &str = "permission";

pub const DOCTOR_ROLE: &str = "Doctor";
pub const PATIENT_ROLE: &str = "Patient";

pub const DOCTOR_PERMISSIONS: [&str; 4] = ["update", "read", "delete", "create"];
pub const PATIENT_PERMISSIONS: [&str; 1] = ["read"];

/// Role id for a role name, as carried by the seeded rows.
pub fn role_id(name: &str) -> String {
    name.to_lowercase()
}

/// Role row as seeded at migration time. The id is the lower-cased
/// role name and the concurrency stamp is a fixed placeholder, so the
/// same call always produces the same row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSeed {
    pub id: String,
    pub name: String,
    pub normalized_name: String,
    pub concurrency_stamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleClaimSeed {
    pub id: String,
    pub role_id: String,
    pub claim_type: String,
    pub claim_value: String,
}

/// Build one role record plus one permission claim per entry.
/// Claim ids are the composite "<role_id>:<permission>", which keeps
/// them stable and distinct across rebuilds.
pub fn role_with_permissions(name: &str, permissions: &[&str]) -> (RoleSeed, Vec<RoleClaimSeed>) {
    let role = RoleSeed {
        id: role_id(name),
        name: name.to_owned(),
        normalized_name: name.to_uppercase(),
        concurrency_stamp: Uuid::nil().to_string(),
    };

    let claims = permissions
        .iter()
        .map(|permission| RoleClaimSeed {
            id: format!("{}:{}", role.id, permission),
            role_id: role.id.clone(),
            claim_type: PERMISSION_CLAIM_TYPE.to_owned(),
            claim_value: (*permission).to_owned(),
        })
        .collect();

    (role, claims)
}

/// The two roles the application ships with.
pub fn builtin_roles() -> Vec<(RoleSeed, Vec<RoleClaimSeed>)> {
    vec![
        role_with_permissions(DOCTOR_ROLE, &DOCTOR_PERMISSIONS),
        role_with_permissions(PATIENT_ROLE, &PATIENT_PERMISSIONS),
    ]
}
