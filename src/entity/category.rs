use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  #[sea_orm(unique)]
  pub name: String,
  #[sea_orm(unique)]
  pub slug: String,
  pub description: String,
  pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "product::Entity")]
  Products,
}

impl Related<product::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Products.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
