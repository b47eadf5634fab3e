pub use sea_orm_migration::prelude::*;

mod m20260315_000001_create_table_courses;
mod m20260315_000002_create_table_topics;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260315_000001_create_table_courses::Migration),
            Box::new(m20260315_000002_create_table_topics::Migration),
        ]
    }
}
