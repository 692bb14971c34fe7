use crate::{
  entity::{order, order_item},
  prelude::*,
};

pub struct Orders<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Orders<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Lookup by the public 8-character order id, not the row id.
  pub async fn by_public_id(&self, order_id: &str) -> Result<order::Model> {
    order::Entity::find()
      .filter(order::Column::OrderId.eq(order_id))
      .one(self.db)
      .await?
      .ok_or(Error::OrderNotFound)
  }

  pub async fn items(&self, id: i32) -> Result<Vec<order_item::Model>> {
    Ok(
      order_item::Entity::find()
        .filter(order_item::Column::OrderId.eq(id))
        .all(self.db)
        .await?,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    sv::{Checkout, checkout::BuyerInfo},
    sv::test_utils::{seed, test_db},
  };

  #[tokio::test]
  async fn by_public_id_resolves_placed_orders() {
    let db = test_db::setup().await;
    seed::product(&db, "widget", Decimal::from(1000)).await;

    let placed = Checkout::new(&db)
      .place_order(
        "widget",
        BuyerInfo {
          full_name: "Buyer One".to_string(),
          email: "buyer@example.com".to_string(),
          phone: "0300-0000000".to_string(),
          address: "Street 1".to_string(),
          city: "Lahore".to_string(),
        },
        3,
        None,
      )
      .await
      .unwrap();

    let sv = Orders::new(&db);
    let found = sv.by_public_id(&placed.order_id).await.unwrap();
    assert_eq!(found.id, placed.id);

    let items = sv.items(found.id).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 3);
    assert_eq!(items[0].cost(), Decimal::from(3000));

    let missing = sv.by_public_id("ZZZZZZZZ").await;
    assert!(matches!(missing, Err(Error::OrderNotFound)));
  }
}
