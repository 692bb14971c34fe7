use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Categories::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Categories::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(
            ColumnDef::new(Categories::Name)
              .string()
              .not_null()
              .unique_key(),
          )
          .col(
            ColumnDef::new(Categories::Slug)
              .string()
              .not_null()
              .unique_key(),
          )
          .col(
            ColumnDef::new(Categories::Description)
              .text()
              .not_null()
              .default(""),
          )
          .col(ColumnDef::new(Categories::CreatedAt).date_time().not_null())
          .to_owned(),
      )
      .await?;

    manager
      .create_table(
        Table::create()
          .table(Products::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Products::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Products::Name).string().not_null())
          .col(ColumnDef::new(Products::Slug).string().not_null().unique_key())
          .col(ColumnDef::new(Products::Description).text().not_null())
          .col(ColumnDef::new(Products::CategoryId).integer().not_null())
          .col(ColumnDef::new(Products::Brand).string().not_null().default(""))
          .col(
            ColumnDef::new(Products::BasePrice).decimal_len(10, 2).not_null(),
          )
          .col(
            ColumnDef::new(Products::Currency)
              .string_len(3)
              .not_null()
              .default("PKR"),
          )
          .col(
            ColumnDef::new(Products::IsFeatured)
              .boolean()
              .not_null()
              .default(false),
          )
          .col(
            ColumnDef::new(Products::IsActive)
              .boolean()
              .not_null()
              .default(true),
          )
          .col(
            ColumnDef::new(Products::IsApproved)
              .boolean()
              .not_null()
              .default(false),
          )
          .col(ColumnDef::new(Products::CreatedAt).date_time().not_null())
          .col(ColumnDef::new(Products::UpdatedAt).date_time().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_products_category")
              .from(Products::Table, Products::CategoryId)
              .to(Categories::Table, Categories::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_products_category")
          .table(Products::Table)
          .col(Products::CategoryId)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Products::Table).to_owned())
      .await?;

    manager.drop_table(Table::drop().table(Categories::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Categories {
  Table,
  Id,
  Name,
  Slug,
  Description,
  CreatedAt,
}

#[derive(DeriveIden)]
pub enum Products {
  Table,
  Id,
  Name,
  Slug,
  Description,
  CategoryId,
  Brand,
  BasePrice,
  Currency,
  IsFeatured,
  IsActive,
  IsApproved,
  CreatedAt,
  UpdatedAt,
}
