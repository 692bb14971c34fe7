use crate::{
  entity::{CommissionStatus, PaymentMethod, affiliate, affiliate_click, commission},
  prelude::*,
  utils,
};

pub struct Affiliates<'a> {
  db: &'a DatabaseConnection,
}

pub struct NewAffiliate {
  pub full_name: String,
  pub phone: String,
  pub payment_method: PaymentMethod,
  pub payment_details: String,
  pub commission_rate: Option<Decimal>,
}

/// Default commission percentage for new affiliates.
pub fn default_rate() -> Decimal {
  Decimal::new(1000, 2)
}

/// `sales / clicks * 100`, rounded to 2 decimals; `0` for zero clicks.
pub fn conversion_rate(affiliate: &affiliate::Model) -> Decimal {
  if affiliate.total_clicks == 0 {
    return Decimal::ZERO;
  }
  (Decimal::from(affiliate.total_sales) / Decimal::from(affiliate.total_clicks)
    * Decimal::from(100))
  .round_dp(2)
}

impl<'a> Affiliates<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Registers an affiliate with a generated unique code. New accounts
  /// stay unapproved until an admin signs off.
  pub async fn register(&self, new: NewAffiliate) -> Result<affiliate::Model> {
    if new.full_name.trim().is_empty() {
      return Err(Error::InvalidArgs("Full name is required".into()));
    }

    let code = loop {
      let code = utils::affiliate_code();
      let exists = affiliate::Entity::find()
        .filter(affiliate::Column::AffiliateCode.eq(&code))
        .one(self.db)
        .await?
        .is_some();
      if !exists {
        break code;
      }
    };

    let now = Utc::now().naive_utc();
    let affiliate = affiliate::ActiveModel {
      id: NotSet,
      affiliate_code: Set(code),
      full_name: Set(new.full_name),
      phone: Set(new.phone),
      payment_method: Set(new.payment_method),
      payment_details: Set(new.payment_details),
      commission_rate: Set(new.commission_rate.unwrap_or_else(default_rate)),
      total_clicks: Set(0),
      total_sales: Set(0),
      total_earnings: Set(Decimal::ZERO),
      paid_earnings: Set(Decimal::ZERO),
      pending_earnings: Set(Decimal::ZERO),
      is_active: Set(true),
      is_approved: Set(false),
      approved_by: Set(None),
      approved_at: Set(None),
      created_at: Set(now),
      updated_at: Set(now),
    };

    Ok(affiliate.insert(self.db).await?)
  }

  pub async fn by_code(&self, code: &str) -> Result<Option<affiliate::Model>> {
    let affiliate = affiliate::Entity::find()
      .filter(affiliate::Column::AffiliateCode.eq(code))
      .one(self.db)
      .await?;
    Ok(affiliate)
  }

  /// Lookup used by attribution: the code only counts while the affiliate
  /// is both active and approved.
  pub async fn eligible_by_code(
    &self,
    code: &str,
  ) -> Result<Option<affiliate::Model>> {
    let affiliate = affiliate::Entity::find()
      .filter(affiliate::Column::AffiliateCode.eq(code))
      .filter(affiliate::Column::IsActive.eq(true))
      .filter(affiliate::Column::IsApproved.eq(true))
      .one(self.db)
      .await?;
    Ok(affiliate)
  }

  pub async fn approve(&self, id: i32, actor: &str) -> Result<()> {
    let affiliate = affiliate::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::AffiliateNotFound)?;

    let now = Utc::now().naive_utc();
    affiliate::ActiveModel {
      is_approved: Set(true),
      approved_by: Set(Some(actor.to_string())),
      approved_at: Set(Some(now)),
      updated_at: Set(now),
      ..affiliate.into()
    }
    .update(self.db)
    .await?;

    Ok(())
  }

  pub async fn approve_many(&self, ids: &[i32], actor: &str) -> Result<u64> {
    let mut updated = 0;
    for &id in ids {
      self.approve(id, actor).await?;
      updated += 1;
    }
    Ok(updated)
  }

  /// Affiliates are never deleted, only deactivated.
  pub async fn deactivate(&self, id: i32) -> Result<()> {
    let affiliate = affiliate::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::AffiliateNotFound)?;

    let now = Utc::now().naive_utc();
    affiliate::ActiveModel {
      is_active: Set(false),
      updated_at: Set(now),
      ..affiliate.into()
    }
    .update(self.db)
    .await?;

    Ok(())
  }

  pub async fn deactivate_many(&self, ids: &[i32]) -> Result<u64> {
    let mut updated = 0;
    for &id in ids {
      self.deactivate(id).await?;
      updated += 1;
    }
    Ok(updated)
  }

  pub async fn set_commission_rate(
    &self,
    id: i32,
    rate: Decimal,
  ) -> Result<()> {
    if rate < Decimal::ZERO || rate > Decimal::from(100) {
      return Err(Error::InvalidArgs("Rate must be within 0..=100".into()));
    }

    let affiliate = affiliate::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::AffiliateNotFound)?;

    let now = Utc::now().naive_utc();
    affiliate::ActiveModel {
      commission_rate: Set(rate),
      updated_at: Set(now),
      ..affiliate.into()
    }
    .update(self.db)
    .await?;

    Ok(())
  }

  pub async fn recent_clicks(
    &self,
    id: i32,
    limit: u64,
  ) -> Result<Vec<affiliate_click::Model>> {
    Ok(
      affiliate_click::Entity::find()
        .filter(affiliate_click::Column::AffiliateId.eq(id))
        .order_by_desc(affiliate_click::Column::ClickedAt)
        .limit(limit)
        .all(self.db)
        .await?,
    )
  }

  pub async fn recent_commissions(
    &self,
    id: i32,
    limit: u64,
  ) -> Result<Vec<commission::Model>> {
    Ok(
      commission::Entity::find()
        .filter(commission::Column::AffiliateId.eq(id))
        .order_by_desc(commission::Column::CreatedAt)
        .limit(limit)
        .all(self.db)
        .await?,
    )
  }

  pub async fn clicks_since(&self, id: i32, since: DateTime) -> Result<u64> {
    Ok(
      affiliate_click::Entity::find()
        .filter(affiliate_click::Column::AffiliateId.eq(id))
        .filter(affiliate_click::Column::ClickedAt.gte(since))
        .count(self.db)
        .await?,
    )
  }

  /// Cancelled commissions no longer count as sales.
  pub async fn sales_since(&self, id: i32, since: DateTime) -> Result<u64> {
    Ok(
      commission::Entity::find()
        .filter(commission::Column::AffiliateId.eq(id))
        .filter(commission::Column::Status.ne(CommissionStatus::Cancelled))
        .filter(commission::Column::CreatedAt.gte(since))
        .count(self.db)
        .await?,
    )
  }
}
