use sea_orm_migration::prelude::*;

mod m20250714_100001_create_identity_tables;
mod m20250714_100002_create_profile_tables;
mod m20250714_100003_create_content_tables;
mod m20250714_100004_create_quiz_tables;
mod m20250714_100005_seed_roles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250714_100001_create_identity_tables::Migration),
            Box::new(m20250714_100002_create_profile_tables::Migration),
            Box::new(m20250714_100003_create_content_tables::Migration),
            Box::new(m20250714_100004_create_quiz_tables::Migration),
            Box::new(m20250714_100005_seed_roles::Migration),
        ]
    }
}
