use crate::{entity::product, prelude::*, utils};

pub struct Products<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Products<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Storefront lookup: only active, admin-approved products resolve.
  pub async fn by_slug(&self, slug: &str) -> Result<Option<product::Model>> {
    let product = product::Entity::find()
      .filter(product::Column::Slug.eq(slug))
      .filter(product::Column::IsActive.eq(true))
      .filter(product::Column::IsApproved.eq(true))
      .one(self.db)
      .await?;
    Ok(product)
  }

  /// Seller submission: slugified from the name with `-N` suffixes until
  /// unique, and hidden until an admin approves it.
  pub async fn create(
    &self,
    name: &str,
    description: &str,
    category_id: i32,
    base_price: Decimal,
    brand: &str,
  ) -> Result<product::Model> {
    let base = utils::slugify(name);
    if base.is_empty() {
      return Err(Error::InvalidArgs("Product name is required".into()));
    }

    let mut slug = base.clone();
    let mut counter = 1;
    while product::Entity::find()
      .filter(product::Column::Slug.eq(&slug))
      .one(self.db)
      .await?
      .is_some()
    {
      slug = format!("{base}-{counter}");
      counter += 1;
    }

    let now = Utc::now().naive_utc();
    let product = product::ActiveModel {
      id: NotSet,
      name: Set(name.to_string()),
      slug: Set(slug),
      description: Set(description.to_string()),
      category_id: Set(category_id),
      brand: Set(brand.to_string()),
      base_price: Set(base_price),
      currency: Set("PKR".to_string()),
      is_featured: Set(false),
      is_active: Set(true),
      is_approved: Set(false),
      created_at: Set(now),
      updated_at: Set(now),
    };

    Ok(product.insert(self.db).await?)
  }

  pub async fn approve(&self, id: i32) -> Result<()> {
    let product = product::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::ProductNotFound)?;

    let now = Utc::now().naive_utc();
    product::ActiveModel {
      is_approved: Set(true),
      updated_at: Set(now),
      ..product.into()
    }
    .update(self.db)
    .await?;

    Ok(())
  }
}
