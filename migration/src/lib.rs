pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_buses;
mod m20240601_000002_create_bus_days;
mod m20240601_000003_create_reservations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_buses::Migration),
            Box::new(m20240601_000002_create_bus_days::Migration),
            Box::new(m20240601_000003_create_reservations::Migration),
        ]
    }
}
