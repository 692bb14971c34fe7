use migration::{Migrator, MigratorTrait};

use crate::prelude::*;

pub struct AppState {
  pub db: DatabaseConnection,
  pub secret: String,
}

impl AppState {
  pub async fn new(db_url: &str, secret: &str) -> Result<Self> {
    let db = Database::connect(db_url).await?;
    Migrator::up(&db, None).await?;

    Ok(Self { db, secret: secret.to_string() })
  }
}
