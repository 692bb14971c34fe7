use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{affiliate_click, category, order_item};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub name: String,
  #[sea_orm(unique)]
  pub slug: String,
  pub description: String,
  pub category_id: i32,
  pub brand: String,
  pub base_price: Decimal,
  pub currency: String,
  pub is_featured: bool,
  pub is_active: bool,
  pub is_approved: bool,
  pub created_at: DateTime,
  pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "category::Entity",
    from = "Column::CategoryId",
    to = "category::Column::Id"
  )]
  Category,
  #[sea_orm(has_many = "order_item::Entity")]
  OrderItems,
  #[sea_orm(has_many = "affiliate_click::Entity")]
  AffiliateClicks,
}

impl Related<category::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Category.def()
  }
}

impl Related<order_item::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::OrderItems.def()
  }
}

impl Related<affiliate_click::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::AffiliateClicks.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
