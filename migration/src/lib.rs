pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users_table;
mod m20250101_000002_create_projects_table;
mod m20250101_000003_create_experiences_table;
mod m20250101_000004_create_certifications_table;
mod m20250101_000005_single_owner_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users_table::Migration),
            Box::new(m20250101_000002_create_projects_table::Migration),
            Box::new(m20250101_000003_create_experiences_table::Migration),
            Box::new(m20250101_000004_create_certifications_table::Migration),
            Box::new(m20250101_000005_single_owner_index::Migration),
        ]
    }
}
