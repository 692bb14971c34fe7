use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{affiliate, commission, order_item};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum OrderStatus {
  #[sea_orm(string_value = "pending")]
  #[default]
  Pending,
  #[sea_orm(string_value = "processing")]
  Processing,
  #[sea_orm(string_value = "shipped")]
  Shipped,
  #[sea_orm(string_value = "delivered")]
  Delivered,
  #[sea_orm(string_value = "cancelled")]
  Cancelled,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  /// Public identifier, 8 uppercase alphanumerics, assigned once.
  #[sea_orm(unique)]
  pub order_id: String,
  pub affiliate_id: Option<i32>,
  pub full_name: String,
  pub email: String,
  pub phone: String,
  pub address: String,
  pub city: String,
  pub postal_code: String,
  pub total_amount: Decimal,
  pub status: OrderStatus,
  pub created_at: DateTime,
  pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "affiliate::Entity",
    from = "Column::AffiliateId",
    to = "affiliate::Column::Id"
  )]
  Affiliate,
  #[sea_orm(has_many = "order_item::Entity")]
  Items,
  #[sea_orm(has_one = "commission::Entity")]
  Commission,
}

impl Related<affiliate::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Affiliate.def()
  }
}

impl Related<order_item::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Items.def()
  }
}

impl Related<commission::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Commission.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
