//! Shared test utilities for database setup

#[cfg(test)]
pub mod test_db {
  use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema,
  };

  use crate::entity::*;

  /// Creates an in-memory SQLite database with all required tables
  pub async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let schema = Schema::new(DbBackend::Sqlite);

    let stmt = schema.create_table_from_entity(category::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    let stmt = schema.create_table_from_entity(product::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    let stmt = schema.create_table_from_entity(affiliate::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    let stmt = schema.create_table_from_entity(order::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    let stmt = schema.create_table_from_entity(order_item::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    let stmt = schema.create_table_from_entity(affiliate_click::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    let stmt = schema.create_table_from_entity(commission::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    db
  }
}

#[cfg(test)]
pub mod seed {
  use sea_orm::{ActiveModelTrait, DatabaseConnection, NotSet, Set};

  use crate::{
    entity::{affiliate, category, product, PaymentMethod},
    prelude::{Decimal, Utc},
  };

  pub async fn affiliate(
    db: &DatabaseConnection,
    code: &str,
    rate: Decimal,
  ) -> affiliate::Model {
    let now = Utc::now().naive_utc();
    affiliate::ActiveModel {
      id: NotSet,
      affiliate_code: Set(code.to_string()),
      full_name: Set("Test Affiliate".to_string()),
      phone: Set(String::new()),
      payment_method: Set(PaymentMethod::Bank),
      payment_details: Set("ACC-000".to_string()),
      commission_rate: Set(rate),
      total_clicks: Set(0),
      total_sales: Set(0),
      total_earnings: Set(Decimal::ZERO),
      paid_earnings: Set(Decimal::ZERO),
      pending_earnings: Set(Decimal::ZERO),
      is_active: Set(true),
      is_approved: Set(true),
      approved_by: Set(Some("admin".to_string())),
      approved_at: Set(Some(now)),
      created_at: Set(now),
      updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap()
  }

  pub async fn product(
    db: &DatabaseConnection,
    slug: &str,
    price: Decimal,
  ) -> product::Model {
    let now = Utc::now().naive_utc();
    let category = category::ActiveModel {
      id: NotSet,
      name: Set(format!("Category for {slug}")),
      slug: Set(format!("cat-{slug}")),
      description: Set(String::new()),
      created_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap();

    product::ActiveModel {
      id: NotSet,
      name: Set(slug.to_string()),
      slug: Set(slug.to_string()),
      description: Set("A test product".to_string()),
      category_id: Set(category.id),
      brand: Set(String::new()),
      base_price: Set(price),
      currency: Set("PKR".to_string()),
      is_featured: Set(false),
      is_active: Set(true),
      is_approved: Set(true),
      created_at: Set(now),
      updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap()
  }
}
