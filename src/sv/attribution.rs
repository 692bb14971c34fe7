use crate::{
  entity::{affiliate, affiliate_click, product},
  prelude::*,
  sv,
};

pub struct Attribution<'a> {
  db: &'a DatabaseConnection,
}

#[derive(Debug, Default, Clone)]
pub struct Visitor {
  pub ip_address: Option<String>,
  pub user_agent: String,
  pub referrer: String,
}

pub struct ClickOutcome {
  pub affiliate: affiliate::Model,
  /// Set when the link named a resolvable product; the handler redirects
  /// to its detail page, otherwise to the home page.
  pub product: Option<product::Model>,
}

impl<'a> Attribution<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Records a visit through an affiliate link. Fails only for an unknown
  /// or ineligible code; an unresolvable product slug is ignored.
  pub async fn record_click(
    &self,
    code: &str,
    product_slug: Option<&str>,
    visitor: Visitor,
  ) -> Result<ClickOutcome> {
    let affiliate = sv::Affiliates::new(self.db)
      .eligible_by_code(code)
      .await?
      .ok_or(Error::AffiliateNotFound)?;

    let product = match product_slug {
      Some(slug) => sv::Products::new(self.db).by_slug(slug).await?,
      None => None,
    };

    let now = Utc::now().naive_utc();
    affiliate_click::ActiveModel {
      id: NotSet,
      affiliate_id: Set(affiliate.id),
      product_id: Set(product.as_ref().map(|p| p.id)),
      ip_address: Set(visitor.ip_address),
      user_agent: Set(visitor.user_agent),
      referrer: Set(visitor.referrer),
      converted: Set(false),
      order_id: Set(None),
      clicked_at: Set(now),
      converted_at: Set(None),
    }
    .insert(self.db)
    .await?;

    // Plain counter bump; concurrent clicks may lose updates, which is
    // accepted at this scale.
    let affiliate = affiliate::ActiveModel {
      total_clicks: Set(affiliate.total_clicks + 1),
      updated_at: Set(now),
      ..affiliate.into()
    }
    .update(self.db)
    .await?;

    debug!(code, clicks = affiliate.total_clicks, "recorded affiliate click");

    Ok(ClickOutcome { affiliate, product })
  }
}
