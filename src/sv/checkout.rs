use crate::{
  entity::{OrderStatus, affiliate, affiliate_click, order, order_item},
  prelude::*,
  sv::{self, commission::NewCommission},
  utils,
};

pub struct Checkout<'a> {
  db: &'a DatabaseConnection,
}

#[derive(Debug, Clone)]
pub struct BuyerInfo {
  pub full_name: String,
  pub email: String,
  pub phone: String,
  pub address: String,
  pub city: String,
}

impl BuyerInfo {
  fn validate(&self) -> Result<()> {
    let required = [
      ("full_name", &self.full_name),
      ("email", &self.email),
      ("phone", &self.phone),
      ("address", &self.address),
      ("city", &self.city),
    ];
    for (field, value) in required {
      if value.trim().is_empty() {
        return Err(Error::InvalidArgs(format!("{field} is required")));
      }
    }
    Ok(())
  }
}

impl<'a> Checkout<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Places an order for `quantity` units of the product. When a verified
  /// affiliate code is attributed, the same transaction also creates the
  /// commission, bumps the affiliate's sale counter, and converts the most
  /// recent matching click. The purchase itself never depends on
  /// attribution succeeding.
  pub async fn place_order(
    &self,
    slug: &str,
    buyer: BuyerInfo,
    quantity: i32,
    affiliate_code: Option<&str>,
  ) -> Result<order::Model> {
    buyer.validate()?;
    if quantity < 1 {
      return Err(Error::InvalidArgs("quantity must be at least 1".into()));
    }

    let product = sv::Products::new(self.db)
      .by_slug(slug)
      .await?
      .ok_or(Error::ProductNotFound)?;

    let total_amount = product.base_price * Decimal::from(quantity);

    // Ineligible or unverifiable codes silently drop attribution.
    let attributed = match affiliate_code {
      Some(code) => {
        sv::Affiliates::new(self.db).eligible_by_code(code).await?
      }
      None => None,
    };

    let txn = self.db.begin().await?;
    let now = Utc::now().naive_utc();

    let order_id = loop {
      let candidate = utils::order_code();
      let taken = order::Entity::find()
        .filter(order::Column::OrderId.eq(&candidate))
        .one(&txn)
        .await?
        .is_some();
      if !taken {
        break candidate;
      }
    };

    let created = order::ActiveModel {
      id: NotSet,
      order_id: Set(order_id),
      affiliate_id: Set(attributed.as_ref().map(|a| a.id)),
      full_name: Set(buyer.full_name),
      email: Set(buyer.email),
      phone: Set(buyer.phone),
      address: Set(buyer.address),
      city: Set(buyer.city),
      postal_code: Set(String::new()),
      total_amount: Set(total_amount),
      status: Set(OrderStatus::Pending),
      created_at: Set(now),
      updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    order_item::ActiveModel {
      id: NotSet,
      order_id: Set(created.id),
      product_id: Set(product.id),
      price: Set(product.base_price),
      quantity: Set(quantity),
    }
    .insert(&txn)
    .await?;

    if let Some(affiliate) = attributed {
      // Snapshot the order total and the affiliate's current rate.
      sv::commission::create_on(&txn, NewCommission {
        affiliate_id: affiliate.id,
        order_id: created.id,
        product_name: product.name.clone(),
        product_price: total_amount,
        commission_rate: affiliate.commission_rate,
        commission_amount: None,
      })
      .await?;

      let affiliate_id = affiliate.id;
      affiliate::ActiveModel {
        total_sales: Set(affiliate.total_sales + 1),
        updated_at: Set(now),
        ..affiliate.into()
      }
      .update(&txn)
      .await?;

      // At most one click converts; a commission is still created when no
      // unconverted click exists for this affiliate and product.
      let recent_click = affiliate_click::Entity::find()
        .filter(affiliate_click::Column::AffiliateId.eq(affiliate_id))
        .filter(affiliate_click::Column::ProductId.eq(product.id))
        .filter(affiliate_click::Column::Converted.eq(false))
        .order_by_desc(affiliate_click::Column::ClickedAt)
        .one(&txn)
        .await?;

      if let Some(click) = recent_click {
        affiliate_click::ActiveModel {
          converted: Set(true),
          order_id: Set(Some(created.id)),
          converted_at: Set(Some(now)),
          ..click.into()
        }
        .update(&txn)
        .await?;
      }

      info!(
        order = %created.order_id,
        affiliate = affiliate_id,
        "attributed checkout"
      );
    }

    txn.commit().await?;
    Ok(created)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    entity::{CommissionStatus, commission},
    sv::{Attribution, attribution::Visitor},
    sv::test_utils::{seed, test_db},
  };

  fn buyer() -> BuyerInfo {
    BuyerInfo {
      full_name: "Buyer One".to_string(),
      email: "buyer@example.com".to_string(),
      phone: "0300-0000000".to_string(),
      address: "Street 1".to_string(),
      city: "Lahore".to_string(),
    }
  }

  #[tokio::test]
  async fn click_then_checkout_converts_and_pays_commission() {
    let db = test_db::setup().await;
    let affiliate =
      seed::affiliate(&db, "ABC12345", Decimal::new(1000, 2)).await;
    let product = seed::product(&db, "widget", Decimal::from(1000)).await;

    Attribution::new(&db)
      .record_click("ABC12345", Some("widget"), Visitor::default())
      .await
      .unwrap();

    let order = Checkout::new(&db)
      .place_order("widget", buyer(), 1, Some("ABC12345"))
      .await
      .unwrap();

    assert_eq!(order.total_amount, Decimal::from(1000));
    assert_eq!(order.affiliate_id, Some(affiliate.id));

    let commissions = commission::Entity::find().all(&db).await.unwrap();
    assert_eq!(commissions.len(), 1);
    let c = &commissions[0];
    assert_eq!(c.order_id, order.id);
    assert_eq!(c.product_price, Decimal::from(1000));
    assert_eq!(c.commission_amount, Decimal::new(10000, 2));
    assert_eq!(c.status, CommissionStatus::Pending);

    let click = affiliate_click::Entity::find()
      .one(&db)
      .await
      .unwrap()
      .unwrap();
    assert!(click.converted);
    assert_eq!(click.order_id, Some(order.id));
    assert!(click.converted_at.is_some());
    assert_eq!(click.product_id, Some(product.id));

    let affiliate = affiliate::Entity::find_by_id(affiliate.id)
      .one(&db)
      .await
      .unwrap()
      .unwrap();
    assert_eq!(affiliate.total_sales, 1);
    assert_eq!(affiliate.pending_earnings, Decimal::new(10000, 2));
  }

  #[tokio::test]
  async fn checkout_without_attribution_creates_no_commission() {
    let db = test_db::setup().await;
    let affiliate =
      seed::affiliate(&db, "ABC12345", Decimal::new(1000, 2)).await;
    seed::product(&db, "widget", Decimal::from(1000)).await;

    let order = Checkout::new(&db)
      .place_order("widget", buyer(), 2, None)
      .await
      .unwrap();

    assert_eq!(order.total_amount, Decimal::from(2000));
    assert!(order.affiliate_id.is_none());

    let items = order_item::Entity::find().all(&db).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[0].price, Decimal::from(1000));

    assert!(commission::Entity::find().all(&db).await.unwrap().is_empty());

    let affiliate = affiliate::Entity::find_by_id(affiliate.id)
      .one(&db)
      .await
      .unwrap()
      .unwrap();
    assert_eq!(affiliate.total_sales, 0);
    assert_eq!(affiliate.total_earnings, Decimal::ZERO);
  }

  #[tokio::test]
  async fn unapproved_affiliate_code_skips_attribution() {
    let db = test_db::setup().await;
    let affiliate =
      seed::affiliate(&db, "ABC12345", Decimal::new(1000, 2)).await;
    seed::product(&db, "widget", Decimal::from(1000)).await;

    affiliate::ActiveModel {
      is_approved: Set(false),
      ..affiliate.clone().into()
    }
    .update(&db)
    .await
    .unwrap();

    // Order still succeeds; the purchase never fails on attribution.
    let order = Checkout::new(&db)
      .place_order("widget", buyer(), 1, Some("ABC12345"))
      .await
      .unwrap();

    assert!(order.affiliate_id.is_none());
    assert!(commission::Entity::find().all(&db).await.unwrap().is_empty());

    let affiliate = affiliate::Entity::find_by_id(affiliate.id)
      .one(&db)
      .await
      .unwrap()
      .unwrap();
    assert_eq!(affiliate.total_sales, 0);
    assert_eq!(affiliate.pending_earnings, Decimal::ZERO);
  }

  #[tokio::test]
  async fn commission_without_click_record_is_still_created() {
    let db = test_db::setup().await;
    seed::affiliate(&db, "ABC12345", Decimal::new(1000, 2)).await;
    seed::product(&db, "widget", Decimal::from(1000)).await;

    // Cookie present, but no click was ever logged.
    Checkout::new(&db)
      .place_order("widget", buyer(), 1, Some("ABC12345"))
      .await
      .unwrap();

    let commissions = commission::Entity::find().all(&db).await.unwrap();
    assert_eq!(commissions.len(), 1);
    assert!(affiliate_click::Entity::find().all(&db).await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn only_most_recent_unconverted_click_flips() {
    let db = test_db::setup().await;
    seed::affiliate(&db, "ABC12345", Decimal::new(1000, 2)).await;
    seed::product(&db, "widget", Decimal::from(1000)).await;

    let sv = Attribution::new(&db);
    sv.record_click("ABC12345", Some("widget"), Visitor::default())
      .await
      .unwrap();
    sv.record_click("ABC12345", Some("widget"), Visitor::default())
      .await
      .unwrap();

    Checkout::new(&db)
      .place_order("widget", buyer(), 1, Some("ABC12345"))
      .await
      .unwrap();

    let converted = affiliate_click::Entity::find()
      .filter(affiliate_click::Column::Converted.eq(true))
      .all(&db)
      .await
      .unwrap();
    assert_eq!(converted.len(), 1);
  }

  #[tokio::test]
  async fn unknown_product_fails_without_side_effects() {
    let db = test_db::setup().await;
    seed::affiliate(&db, "ABC12345", Decimal::new(1000, 2)).await;

    let result = Checkout::new(&db)
      .place_order("missing", buyer(), 1, Some("ABC12345"))
      .await;
    assert!(matches!(result, Err(Error::ProductNotFound)));

    assert!(order::Entity::find().all(&db).await.unwrap().is_empty());
    assert!(commission::Entity::find().all(&db).await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn blank_buyer_fields_fail_validation() {
    let db = test_db::setup().await;
    seed::product(&db, "widget", Decimal::from(1000)).await;

    let mut bad = buyer();
    bad.email = "  ".to_string();

    let result = Checkout::new(&db).place_order("widget", bad, 1, None).await;
    assert!(matches!(result, Err(Error::InvalidArgs(_))));
    assert!(order::Entity::find().all(&db).await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn zero_quantity_rejected() {
    let db = test_db::setup().await;
    seed::product(&db, "widget", Decimal::from(1000)).await;

    let result =
      Checkout::new(&db).place_order("widget", buyer(), 0, None).await;
    assert!(matches!(result, Err(Error::InvalidArgs(_))));
  }
}
