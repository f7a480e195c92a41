//! Migrator registering one table per entity.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_room;
mod m20250101_000002_create_owner;
mod m20250101_000003_create_review;
mod m20250101_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_room::Migration),
            Box::new(m20250101_000002_create_owner::Migration),
            Box::new(m20250101_000003_create_review::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000004_add_indexes::Migration),
        ]
    }
}
