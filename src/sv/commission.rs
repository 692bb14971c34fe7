use crate::{
  entity::{CommissionStatus, affiliate, commission},
  prelude::*,
};

pub struct Commissions<'a> {
  db: &'a DatabaseConnection,
}

pub struct NewCommission {
  pub affiliate_id: i32,
  pub order_id: i32,
  pub product_name: String,
  pub product_price: Decimal,
  pub commission_rate: Decimal,
  /// Computed from price and rate when not supplied.
  pub commission_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Earnings {
  pub pending: Decimal,
  pub paid: Decimal,
  pub total: Decimal,
}

/// `product_price * rate / 100`, rounded to the 2-decimal minor unit.
pub fn commission_amount(product_price: Decimal, rate: Decimal) -> Decimal {
  (product_price * rate / Decimal::from(100)).round_dp(2)
}

/// pending -> approved -> paid; pending|approved -> cancelled.
/// paid and cancelled are terminal.
pub fn transition_allowed(
  from: CommissionStatus,
  to: CommissionStatus,
) -> bool {
  use CommissionStatus::*;
  matches!(
    (from, to),
    (Pending, Approved)
      | (Approved, Paid)
      | (Pending, Cancelled)
      | (Approved, Cancelled)
  )
}

/// Rebuilds the affiliate's earning aggregates from its commission rows.
/// Always a full recompute, so the result depends only on the persisted
/// status of each commission, not on transition order.
pub async fn recompute_earnings<C: ConnectionTrait>(
  db: &C,
  affiliate_id: i32,
) -> Result<Earnings> {
  let affiliate = affiliate::Entity::find_by_id(affiliate_id)
    .one(db)
    .await?
    .ok_or(Error::AffiliateNotFound)?;

  let commissions = commission::Entity::find()
    .filter(commission::Column::AffiliateId.eq(affiliate_id))
    .all(db)
    .await?;

  let sum = |status: CommissionStatus| {
    commissions
      .iter()
      .filter(|c| c.status == status)
      .map(|c| c.commission_amount)
      .sum::<Decimal>()
  };

  let pending =
    sum(CommissionStatus::Pending) + sum(CommissionStatus::Approved);
  let paid = sum(CommissionStatus::Paid);
  let total = pending + paid;

  let now = Utc::now().naive_utc();
  affiliate::ActiveModel {
    pending_earnings: Set(pending),
    paid_earnings: Set(paid),
    total_earnings: Set(total),
    updated_at: Set(now),
    ..affiliate.into()
  }
  .update(db)
  .await?;

  Ok(Earnings { pending, paid, total })
}

/// Inserts a pending commission and refreshes the owner's aggregates on
/// the given connection, which may be a surrounding transaction.
pub async fn create_on<C: ConnectionTrait>(
  db: &C,
  new: NewCommission,
) -> Result<commission::Model> {
  let amount = new
    .commission_amount
    .unwrap_or_else(|| commission_amount(new.product_price, new.commission_rate));

  let now = Utc::now().naive_utc();
  let created = commission::ActiveModel {
    id: NotSet,
    affiliate_id: Set(new.affiliate_id),
    order_id: Set(new.order_id),
    product_name: Set(new.product_name),
    product_price: Set(new.product_price),
    commission_rate: Set(new.commission_rate),
    commission_amount: Set(amount),
    status: Set(CommissionStatus::Pending),
    approved_by: Set(None),
    approved_at: Set(None),
    paid_at: Set(None),
    admin_notes: Set(String::new()),
    created_at: Set(now),
    updated_at: Set(now),
  }
  .insert(db)
  .await?;

  recompute_earnings(db, created.affiliate_id).await?;

  Ok(created)
}

impl<'a> Commissions<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn create(&self, new: NewCommission) -> Result<commission::Model> {
    let txn = self.db.begin().await?;
    let created = create_on(&txn, new).await?;
    txn.commit().await?;
    Ok(created)
  }

  pub async fn by_id(&self, id: i32) -> Result<Option<commission::Model>> {
    let commission = commission::Entity::find_by_id(id).one(self.db).await?;
    Ok(commission)
  }

  pub async fn by_affiliate(
    &self,
    affiliate_id: i32,
    status: Option<CommissionStatus>,
  ) -> Result<Vec<commission::Model>> {
    let mut query = commission::Entity::find()
      .filter(commission::Column::AffiliateId.eq(affiliate_id))
      .order_by_desc(commission::Column::CreatedAt);

    if let Some(status) = status {
      query = query.filter(commission::Column::Status.eq(status));
    }

    Ok(query.all(self.db).await?)
  }

  /// Moves a commission through the lifecycle, stamping approval/payment
  /// metadata and rebuilding the affiliate's aggregates.
  pub async fn set_status(
    &self,
    id: i32,
    status: CommissionStatus,
    actor: Option<&str>,
  ) -> Result<commission::Model> {
    let txn = self.db.begin().await?;

    let commission = commission::Entity::find_by_id(id)
      .one(&txn)
      .await?
      .ok_or(Error::CommissionNotFound)?;

    if !transition_allowed(commission.status, status) {
      return Err(Error::InvalidTransition {
        from: commission.status,
        to: status,
      });
    }

    let now = Utc::now().naive_utc();
    let affiliate_id = commission.affiliate_id;

    let mut active: commission::ActiveModel = commission.into();
    active.status = Set(status);
    active.updated_at = Set(now);
    match status {
      CommissionStatus::Approved => {
        active.approved_by = Set(actor.map(str::to_string));
        active.approved_at = Set(Some(now));
      }
      CommissionStatus::Paid => {
        active.paid_at = Set(Some(now));
      }
      CommissionStatus::Pending | CommissionStatus::Cancelled => {}
    }

    let updated = active.update(&txn).await?;
    recompute_earnings(&txn, affiliate_id).await?;

    txn.commit().await?;
    Ok(updated)
  }

  /// Bulk transitions mirror the admin actions: each eligible row gets the
  /// single-commission transition; ineligible and unknown ids are skipped.
  pub async fn approve_many(&self, ids: &[i32], actor: &str) -> Result<u64> {
    self
      .transition_eligible(ids, CommissionStatus::Approved, Some(actor), |s| {
        s == CommissionStatus::Pending
      })
      .await
  }

  pub async fn mark_paid_many(&self, ids: &[i32]) -> Result<u64> {
    self
      .transition_eligible(ids, CommissionStatus::Paid, None, |s| {
        s == CommissionStatus::Approved
      })
      .await
  }

  pub async fn cancel_many(&self, ids: &[i32]) -> Result<u64> {
    self
      .transition_eligible(ids, CommissionStatus::Cancelled, None, |s| {
        matches!(s, CommissionStatus::Pending | CommissionStatus::Approved)
      })
      .await
  }

  async fn transition_eligible(
    &self,
    ids: &[i32],
    to: CommissionStatus,
    actor: Option<&str>,
    eligible: impl Fn(CommissionStatus) -> bool,
  ) -> Result<u64> {
    let rows = commission::Entity::find()
      .filter(commission::Column::Id.is_in(ids.iter().copied()))
      .all(self.db)
      .await?;

    let mut updated = 0;
    for row in rows {
      if eligible(row.status) {
        self.set_status(row.id, to, actor).await?;
        updated += 1;
      }
    }
    Ok(updated)
  }
}
