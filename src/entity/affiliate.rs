use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{affiliate_click, commission, order};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum PaymentMethod {
  #[sea_orm(string_value = "bank")]
  #[default]
  Bank,
  #[sea_orm(string_value = "paypal")]
  Paypal,
  #[sea_orm(string_value = "easypaisa")]
  Easypaisa,
  #[sea_orm(string_value = "jazzcash")]
  Jazzcash,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "affiliates")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  #[sea_orm(unique)]
  pub affiliate_code: String,
  pub full_name: String,
  pub phone: String,
  pub payment_method: PaymentMethod,
  pub payment_details: String,
  pub commission_rate: Decimal,
  pub total_clicks: i32,
  pub total_sales: i32,
  pub total_earnings: Decimal,
  pub paid_earnings: Decimal,
  pub pending_earnings: Decimal,
  pub is_active: bool,
  pub is_approved: bool,
  pub approved_by: Option<String>,
  pub approved_at: Option<DateTime>,
  pub created_at: DateTime,
  pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "affiliate_click::Entity")]
  Clicks,
  #[sea_orm(has_many = "commission::Entity")]
  Commissions,
  #[sea_orm(has_many = "order::Entity")]
  Orders,
}

impl Related<affiliate_click::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Clicks.def()
  }
}

impl Related<commission::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Commissions.def()
  }
}

impl Related<order::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Orders.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
