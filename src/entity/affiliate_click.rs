use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{affiliate, order, product};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "affiliate_clicks")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub affiliate_id: i32,
  pub product_id: Option<i32>,
  pub ip_address: Option<String>,
  pub user_agent: String,
  pub referrer: String,
  /// `true` implies `order_id` and `converted_at` are set.
  pub converted: bool,
  pub order_id: Option<i32>,
  pub clicked_at: DateTime,
  pub converted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "affiliate::Entity",
    from = "Column::AffiliateId",
    to = "affiliate::Column::Id"
  )]
  Affiliate,
  #[sea_orm(
    belongs_to = "product::Entity",
    from = "Column::ProductId",
    to = "product::Column::Id"
  )]
  Product,
  #[sea_orm(
    belongs_to = "order::Entity",
    from = "Column::OrderId",
    to = "order::Column::Id"
  )]
  Order,
}

impl Related<affiliate::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Affiliate.def()
  }
}

impl Related<product::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Product.def()
  }
}

impl Related<order::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Order.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
