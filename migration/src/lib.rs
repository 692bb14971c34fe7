pub use sea_orm_migration::prelude::*;

mod m20260812_000001_create_catalog;
mod m20260812_000002_create_affiliates;
mod m20260812_000003_create_orders;
mod m20260812_000004_create_tracking;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20260812_000001_create_catalog::Migration),
      Box::new(m20260812_000002_create_affiliates::Migration),
      Box::new(m20260812_000003_create_orders::Migration),
      Box::new(m20260812_000004_create_tracking::Migration),
    ]
  }
}
